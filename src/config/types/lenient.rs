//! Forgiving deserializers for hand-written config values.
//!
//! `conf.yml` is authored by people, and a title of `2024` or a hide flag of
//! `"yes"` must not make the whole document unreadable. The schema reports
//! such values; these helpers map them to a defined fallback so the typed
//! model always loads.
//!
//! Use with `#[serde(default, deserialize_with = "lenient::...")]`.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Scalars become strings, anything else becomes `None`.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(&Value::deserialize(deserializer)?))
}

/// Truthiness as the dashboard front-end sees it.
///
/// `false`, `0`, `""`, `null` and a missing key are falsy; every other value
/// (including `"false"` as a string) is truthy.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// Non-negative integers (or strings holding one) that fit in `u32`.
///
/// Whole floats such as `2.0` count as integers, matching the schema's
/// `integer` type.
pub fn hotkey<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => match n.as_u64() {
            Some(n) => u32::try_from(n).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(f))
                .map(|f| f as u32),
        },
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Sequences of records. A non-sequence (`null`, a mapping, a scalar) reads
/// as empty, and elements that are not records of the right shape are
/// dropped.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Records. Anything but a mapping (or a mapping that does not fit) reads
/// as the default record.
pub fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    })
}

pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
