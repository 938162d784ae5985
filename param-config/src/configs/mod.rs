use std::env;

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone, Default)]
pub struct SsmStoreConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

#[async_trait::async_trait]
impl Configs for SsmStoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(SsmStoreConfig {
            region: optional_env("AWS_REGION"),
            profile: optional_env("AWS_PROFILE"),
            endpoint_url: env::var("AWS_ENDPOINT")
                .or_else(|_| env::var("SSM_ENDPOINT"))
                .ok(),
        })
    }
}

pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok()
}
