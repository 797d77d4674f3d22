//! Decoding of heterogeneous provider payloads into a flat number sequence

use crate::error::SourceError;
use serde_json::Value;

/// Wire encoding a provider answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFormat {
    /// JSON array of integers, e.g. `[2, 3, 5, 7]`
    JsonArray,
    /// One integer per line of plain text
    LineDelimited,
}

impl ProviderFormat {
    pub fn decode(&self, body: &str) -> Result<Vec<i64>, SourceError> {
        match self {
            ProviderFormat::JsonArray => decode_json_array(body),
            ProviderFormat::LineDelimited => Ok(decode_lines(body)),
        }
    }
}

/// Every element must be an integer; anything else rejects the whole payload.
fn decode_json_array(body: &str) -> Result<Vec<i64>, SourceError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(SourceError::Malformed(format!(
                "expected array, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .iter()
        .map(|item| {
            item.as_i64()
                .or_else(|| item.as_f64().and_then(integral_f64))
                .ok_or_else(|| {
                    SourceError::Malformed(format!("non-integer element {}", item))
                })
        })
        .collect()
}

/// `2.0` is accepted as `2`; fractional or out-of-range values are not.
fn integral_f64(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Unparseable and blank lines are dropped.
fn decode_lines(body: &str) -> Vec<i64> {
    body.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.parse::<i64>().ok())
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
