//! Error types for function schemas

use thiserror::Error;

/// Errors raised while parsing, validating or deriving a [`Schema`](super::Schema)
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Text that should hold a schema is not valid JSON
    #[error("Failed to parse schema JSON: {detail}")]
    Parse {
        detail: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON that does not match the function meta-schema
    #[error("Invalid schema shape: {0}")]
    InvalidShape(String),

    /// A `required` entry that names no property
    #[error("Required property '{0}' is not defined in properties")]
    UnknownRequired(String),

    /// A Rust type that cannot be described as a function schema
    #[error("Unsupported schema construct: {0}")]
    Unsupported(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse {
            detail: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_keeps_detail() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let line = json_err.line();
        let err: SchemaError = json_err.into();

        assert!(err.to_string().starts_with("Failed to parse schema JSON"));
        match err {
            SchemaError::Parse { source, .. } => assert_eq!(source.line(), line),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
