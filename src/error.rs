//! Error types for the object validator
//!
//! These are configuration errors: a schema that cannot be built or walked.
//! Failures of the validated value itself never show up here; they are
//! collected in an [`ErrorSink`](crate::sink::ErrorSink).

use thiserror::Error;

/// Result type for validator operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema and configuration errors
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Unknown schema type '{name}' at {path}")]
    UnknownType { name: String, path: String },

    #[error("Invalid schema at {path}: {reason}")]
    InvalidFormat { path: String, reason: String },

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("Schema nesting exceeds maximum depth of {max_depth} at {path}")]
    DepthExceeded { max_depth: usize, path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl SchemaError {
    pub(crate) fn invalid(path: &str, reason: impl Into<String>) -> Self {
        SchemaError::InvalidFormat {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
