use crate::core::error::RateError;
use serde_json::{Map, Value};

/// Decoded `{base}.json` payload: `{"date": "...", "usd": {"eur": 0.92, ...}}`.
///
/// Only the top level is required to be an object. Nested shapes are checked
/// when a rate is looked up so that a bad entry for one pair does not make the
/// whole document unusable.
#[derive(Debug, Clone)]
pub struct RateDocument {
    entries: Map<String, Value>,
}

impl RateDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RateError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| RateError::Decode(e.to_string()))?;
        match value {
            Value::Object(entries) => Ok(RateDocument { entries }),
            other => Err(RateError::Decode(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Publication date reported by the source, if any.
    pub fn date(&self) -> Option<&str> {
        self.entries.get("date").and_then(Value::as_str)
    }

    /// Looks up `document[origin][destination]`, ignoring case of both codes.
    pub fn rate(&self, origin: &str, destination: &str) -> Result<f64, RateError> {
        let base = origin.to_lowercase();
        let target = destination.to_lowercase();

        let value = self
            .entries
            .get(&base)
            .and_then(Value::as_object)
            .and_then(|rates| rates.get(&target))
            .ok_or_else(|| RateError::missing(origin, destination))?;

        let rate = value
            .as_f64()
            .ok_or_else(|| RateError::invalid(origin, destination, value))?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateError::invalid(origin, destination, rate));
        }
        Ok(rate)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
