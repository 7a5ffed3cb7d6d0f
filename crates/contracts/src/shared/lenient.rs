//! Tolerant decoding of numeric fields.
//!
//! The store serialises decimals as strings ("150.00") and older rows may carry
//! nulls or garbage. Amounts that cannot be read become zero instead of failing
//! the whole page.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Число из JSON-значения; всё, что не читается как конечное число, даёт 0
pub fn value_as_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Целое из JSON-значения (дробная часть отбрасывается)
pub fn value_as_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| value_as_f64(value).trunc() as i64),
        _ => value_as_f64(value).trunc() as i64,
    }
}

/// `deserialize_with` для денежных полей. Use together with `#[serde(default)]`.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_as_f64).unwrap_or(0.0))
}

/// `deserialize_with` для количеств (остаток, количество в продаже)
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_as_i64).unwrap_or(0))
}
