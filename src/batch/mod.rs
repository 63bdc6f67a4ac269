//! Normalizing many raw values at once, loaded from JSON.

pub mod generator;
pub mod report;

pub use generator::{generate_samples, SampleConfig};
pub use report::{BatchReport, NormalizedRecord};

use crate::core::amount::RawAmount;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors arising from loading batch input.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array or an object with a \"values\" array, got {0}")]
    UnexpectedShape(&'static str),
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse raw values from either `[...]` or `{ "values": [...] }`.
pub fn parse_values(json: &str) -> Result<Vec<RawAmount>, BatchError> {
    let document: Value = serde_json::from_str(json)?;
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("values") {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(BatchError::UnexpectedShape(shape_name(&other))),
            None => return Err(BatchError::UnexpectedShape("an object without \"values\"")),
        },
        other => return Err(BatchError::UnexpectedShape(shape_name(&other))),
    };
    Ok(items.into_iter().map(RawAmount::from).collect())
}

pub fn load_values(path: impl AsRef<Path>) -> Result<Vec<RawAmount>, BatchError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        log::warn!("cannot read batch input {}: {}", path.display(), source);
        BatchError::Io {
            path: path.display().to_string(),
            source,
        }
    })?;
    let values = parse_values(&content)?;
    log::info!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let values = parse_values(r#"["Rp 1.000", 2000, null]"#).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[2], RawAmount::Absent);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let values = parse_values(r#"{ "values": ["1,5"] }"#).unwrap();
        assert_eq!(values, vec![RawAmount::Text("1,5".into())]);
    }

    #[test]
    fn test_wrong_shapes() {
        assert!(matches!(
            parse_values(r#""1000""#),
            Err(BatchError::UnexpectedShape("a string"))
        ));
        assert!(matches!(
            parse_values(r#"{ "values": 3 }"#),
            Err(BatchError::UnexpectedShape("a number"))
        ));
        assert!(matches!(
            parse_values(r#"{ "amounts": [] }"#),
            Err(BatchError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_values("[1,"), Err(BatchError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_values("/nonexistent/values.json"),
            Err(BatchError::Io { .. })
        ));
    }
}
