use std::fmt;

use crate::domain::FetchOutcome;

pub mod memory;
pub mod ssm;

pub use memory::MemoryParameterStore;
pub use ssm::SsmParameterStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ConnectionFailed(String),
    RequestFailed(String),
    MalformedParameter(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            Self::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            Self::MalformedParameter(msg) => write!(f, "Malformed parameter: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only seam over the external parameter store. Implementations resolve
/// the requested names and report the unresolved ones without interpreting them.
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    async fn fetch(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<FetchOutcome, StoreError>;
}
