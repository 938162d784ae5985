use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sensitivity class assigned by the external store. Materialization never
/// looks at this; encrypted values arrive already decrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ParameterKind {
    #[default]
    Plain,
    Secure,
    StringList,
}

/// A named configuration value as returned by the external store.
/// Metadata fields are owned by the store and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub kind: ParameterKind,
    pub version: Option<i64>,
    pub last_modified: Option<DateTime<Utc>>,
    pub arn: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: ParameterKind::default(),
            version: None,
            last_modified: None,
            arn: None,
        }
    }

    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Result of one fetch call: resolved parameters in request order plus the
/// names the store could not resolve, surfaced as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub parameters: Vec<Parameter>,
    pub invalid_parameters: Vec<String>,
}

/// Name → value mapping built fresh from a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigMap(HashMap<String, String>);

impl ConfigMap {
    /// Folds a parameter sequence into a mapping. A name appearing more than
    /// once resolves to the last occurrence's value.
    pub fn from_parameters(parameters: impl IntoIterator<Item = Parameter>) -> Self {
        let mut entries = HashMap::new();
        for parameter in parameters {
            entries.insert(parameter.name, parameter.value);
        }
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}
