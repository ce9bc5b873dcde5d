use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParametersError {
    #[error("Invalid JSON parameters: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses operator-supplied plugin parameters.
///
/// Only well-formedness is checked; the plugin itself decides whether the
/// payload makes sense. Blank input means "no parameters" and becomes `{}`.
pub fn parse_parameters(text: &str) -> Result<Value, ParametersError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    Ok(serde_json::from_str(text)?)
}
