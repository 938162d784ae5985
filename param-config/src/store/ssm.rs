use aws_config::BehaviorVersion;
use aws_sdk_ssm::{Client, types::ParameterType};
use aws_types::region::Region;
use chrono::DateTime;
use tracing::debug;

use crate::configs::SsmStoreConfig;
use crate::domain::{FetchOutcome, Parameter, ParameterKind};
use crate::store::{ParameterStore, StoreError};

// GetParameters accepts at most this many names per request.
const MAX_NAMES_PER_REQUEST: usize = 10;

#[derive(Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub async fn new(config: SsmStoreConfig) -> Result<Self, StoreError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;

        Ok(Self::with_client(Client::new(&shared_config)))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for SsmParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmParameterStore").finish()
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn fetch(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<FetchOutcome, StoreError> {
        let mut outcome = FetchOutcome::default();

        for chunk in names.chunks(MAX_NAMES_PER_REQUEST) {
            debug!(
                count = chunk.len(),
                with_decryption, "Fetching parameters from SSM"
            );

            let response = self
                .client
                .get_parameters()
                .set_names(Some(chunk.to_vec()))
                .with_decryption(with_decryption)
                .send()
                .await
                .map_err(|err| {
                    StoreError::RequestFailed(format!("Failed to get parameters: {}", err))
                })?;

            for parameter in response.parameters() {
                outcome.parameters.push(map_parameter(parameter)?);
            }
            outcome
                .invalid_parameters
                .extend(response.invalid_parameters().iter().cloned());
        }

        Ok(outcome)
    }
}

fn map_parameter(parameter: &aws_sdk_ssm::types::Parameter) -> Result<Parameter, StoreError> {
    let name = parameter.name().ok_or_else(|| {
        StoreError::MalformedParameter("Store returned a parameter without a name".to_string())
    })?;

    let value = parameter.value().ok_or_else(|| {
        StoreError::MalformedParameter(format!("Parameter '{}' has no value", name))
    })?;

    let kind = match parameter.r#type() {
        Some(ParameterType::SecureString) => ParameterKind::Secure,
        Some(ParameterType::StringList) => ParameterKind::StringList,
        _ => ParameterKind::Plain,
    };

    Ok(Parameter {
        name: name.to_string(),
        value: value.to_string(),
        kind,
        version: Some(parameter.version()),
        last_modified: parameter
            .last_modified_date()
            .and_then(|ts| DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())),
        arn: parameter.arn().map(|arn| arn.to_string()),
    })
}
