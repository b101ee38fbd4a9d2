//! Lenient field decoding for stored documents.
//!
//! Stored documents are written by forms and older app versions, so fields
//! arrive as integers, floats, numeric strings or garbage. Anything that is
//! not usable decodes to `None` (or an empty name); nothing here fails.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use stockboard_core::ItemId;

use crate::item::Location;

/// Parse a JSON value as a real number.
///
/// Strings are trimmed and the empty string counts as zero, matching how the
/// form layer coerces text fields. Non-finite values are rejected.
pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_text(s),
        _ => None,
    }
}

/// Parse form/document text as a finite number.
pub(crate) fn parse_text(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Amounts and thresholds are kept as read, fractions included.
pub(crate) fn quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value))
}

pub(crate) fn name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

pub(crate) fn location<'de, D>(deserializer: D) -> Result<Option<Location>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(Location::new(s)),
        _ => None,
    })
}

pub(crate) fn item_id<'de, D>(deserializer: D) -> Result<Option<ItemId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}
