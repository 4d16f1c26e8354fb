//! Layered result construction shared by all variants
//!
//! Every variant starts from [`base_result`] and layers its own fields on
//! top with [`extend_result`]. The base is taken by value and a new mapping
//! is returned, so no caller ever sees a mapping change underneath it.

use serde_json::Value;
use tracing::warn;

use crate::common::types::{Payload, ResultMapping};

/// Name of the field holding the original payload
pub const INPUT_FIELD: &str = "input";

/// Root layer: a mapping with only the `input` field
pub fn base_result(input: &Payload) -> ResultMapping {
    let mut result = ResultMapping::new();
    result.insert(INPUT_FIELD.to_string(), input.clone());
    result
}

/// Append variant fields after the fields already in `base`
///
/// Existing fields win over colliding variant fields, so `input` is always
/// the caller's original payload.
pub fn extend_result<I, K>(base: ResultMapping, fields: I) -> ResultMapping
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut result = base;
    for (key, value) in fields {
        let key = key.into();
        if result.contains_key(&key) {
            warn!(field = %key, "Ignoring variant field that would overwrite a base field");
            continue;
        }
        result.insert(key, value);
    }
    result
}
