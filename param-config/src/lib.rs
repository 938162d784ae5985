pub mod cli;
pub mod configs;
pub mod domain;
pub mod store;

pub use domain::{ConfigMap, FetchOutcome, Parameter, ParameterKind};
pub use store::{ParameterStore, StoreError};
