//! Forgiving field deserializers for hand-written feed data
//!
//! Feed files are edited by hand or generated from spreadsheets, so a field
//! may be missing, `null`, an empty string, or a bare number. None of these
//! are errors: missing text becomes `""`, and an optional field is only
//! present when it carries non-empty text.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a required text field, defaulting to the empty string
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text).unwrap_or_default())
}

/// Deserialize an optional text field; empty text counts as absent
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text).filter(|s| !s.is_empty()))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
