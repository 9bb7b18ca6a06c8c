//! Tolerant field decoders for upstream records.
//!
//! The catalog is decoded as one array, so a single mistyped field must not
//! reject every record. These decoders degrade odd values instead of failing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Pass-through decoder: an explicit `null` is kept as `Some(Value::Null)`,
/// while an absent key stays `None` through `#[serde(default)]`.
pub(crate) fn keep_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text field: scalars become their text, anything else is treated as absent.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(scalar_text)
}

/// List of text: non-scalar elements are dropped, a bare scalar becomes a
/// one-element list.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        Value::Object(_) | Value::Null => None,
        scalar => scalar_text(scalar).map(|s| vec![s]),
    })
}
