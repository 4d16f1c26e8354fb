//! Shared value types passed into and out of strategies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{Result, StrategyError};

/// Caller-supplied input payload, carried through to the result unchanged
pub type Payload = serde_json::Value;

/// Ordered field name -> value mapping produced by `Strategy::execute`
///
/// Field order follows insertion order: the base `input` field first,
/// then the variant's own fields.
pub type ResultMapping = serde_json::Map<String, serde_json::Value>;

/// Variant-specific named construction parameters
///
/// The registry factories read their required parameters from here,
/// so a caller holding only a resolved descriptor can still build
/// the variant without knowing its concrete type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyParams {
    values: BTreeMap<String, String>,
}

impl StrategyParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get a parameter that `strategy` cannot be built without
    pub fn require(&self, strategy: &'static str, name: &'static str) -> Result<&str> {
        self.get(name).ok_or(StrategyError::MissingParameter {
            strategy,
            parameter: name,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a `name=value` pair as given on the command line
    ///
    /// Only the first `=` separates; the value may contain more.
    pub fn parse_pair(pair: &str) -> Result<(String, String)> {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| StrategyError::InvalidParameter(format!("expected name=value, got `{}`", pair)))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(StrategyError::InvalidParameter(format!(
                "empty parameter name in `{}`",
                pair
            )));
        }

        Ok((name.to_string(), value.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StrategyParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
