use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::{FetchOutcome, Parameter};
use crate::store::{ParameterStore, StoreError};

/// In-memory store for tests and offline runs. Decryption is a no-op since
/// values are held in plaintext.
#[derive(Clone, Default)]
pub struct MemoryParameterStore {
    parameters: Arc<RwLock<HashMap<String, Parameter>>>,
}

impl MemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: Vec<Parameter>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.parameters.write().unwrap();
            for parameter in parameters {
                guard.insert(parameter.name.clone(), parameter);
            }
        }
        store
    }

    pub fn put(&self, parameter: Parameter) {
        let mut guard = self.parameters.write().unwrap();
        guard.insert(parameter.name.clone(), parameter);
    }
}

impl std::fmt::Debug for MemoryParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.parameters.read().map(|p| p.len()).unwrap_or(0);
        f.debug_struct("MemoryParameterStore")
            .field("parameters", &count)
            .finish()
    }
}

#[async_trait::async_trait]
impl ParameterStore for MemoryParameterStore {
    async fn fetch(
        &self,
        names: &[String],
        _with_decryption: bool,
    ) -> Result<FetchOutcome, StoreError> {
        let guard = self.parameters.read().unwrap();

        let mut outcome = FetchOutcome::default();
        for name in names {
            match guard.get(name) {
                Some(parameter) => outcome.parameters.push(parameter.clone()),
                None => outcome.invalid_parameters.push(name.clone()),
            }
        }

        Ok(outcome)
    }
}
