//! Lenient deserializers for loosely typed source feeds.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, a number, or null and keep it as an optional string.
///
/// Free-text form fields (age, height, rating) arrive as either type depending
/// on which client produced the row. Empty strings collapse to `None`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
