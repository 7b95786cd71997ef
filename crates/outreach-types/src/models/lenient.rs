//! Forgiving deserializers for externally owned records.
//!
//! The account feed and the draft come from UI state that may hold empty
//! strings, numeric strings or nulls where numbers belong. Anything that is
//! not a usable number decodes as zero (or `None` for optional fields) instead
//! of failing the whole snapshot.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn truncate(v: f64) -> Option<i64> {
    if v.is_finite() {
        Some(v.trunc() as i64)
    } else {
        None
    }
}

/// Integer field; unusable values become 0.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).and_then(truncate).unwrap_or(0))
}

/// Optional integer field; unusable values become `None`.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).and_then(truncate))
}

/// Float field; unusable values become 0.0.
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Boolean field; accepts `true`/`false`, `0`/`1` and their string forms.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    })
}
