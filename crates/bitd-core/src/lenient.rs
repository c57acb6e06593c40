//! Hosts store numbers loosely: a skill value may arrive as `2`, `2.0`, or
//! `"2"`. These helpers accept all three and fall back to zero for anything
//! that is not a number, so a malformed field never poisons a dice pool.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse an integer from text, accepting decimal forms like `"2.0"`.
///
/// Fractions truncate toward zero. Returns `None` for non-numeric or
/// non-finite text.
pub fn parse_int(text: &str) -> Option<i32> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Some(saturate(n));
    }
    let f = text.parse::<f64>().ok()?;
    f.is_finite().then(|| f.trunc() as i32)
}

/// Extract an integer from a JSON value, or zero.
pub fn int_from_value(value: &Value) -> i32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                saturate(i)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i32)
                    .unwrap_or(0)
            }
        }
        Value::String(s) => parse_int(s).unwrap_or(0),
        _ => 0,
    }
}

/// Extract a float from a JSON value, or zero.
///
/// Unlike [`int_from_value`] this keeps non-finite values parsed from text
/// (`"NaN"`, `"inf"`); callers decide how to treat them.
pub fn float_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Read a JSON value as a flag the way a loosely typed host would.
///
/// Non-zero numbers, non-empty strings, arrays and objects are true;
/// `null`, zero and `""` are false.
pub fn bool_from_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `deserialize_with` adapter for lenient flags.
pub fn bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(bool_from_value(&value))
}

/// `deserialize_with` adapter for lenient integers.
pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(int_from_value(&value))
}

/// `deserialize_with` adapter for lenient floats.
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(float_from_value(&value))
}

fn saturate(n: i64) -> i32 {
    n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
