//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while loading, validating, or writing a driftwatch config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("{field} out of range: {message}")]
    OutOfRange { field: &'static str, message: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },

    #[error("Cannot serialize config: {0}")]
    Serialize(String),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
