//! Top-level error for a full detection run.

use super::error_code::ErrorCode;
use super::{ConfigError, DetectionError, SelectionError, TableError};

/// Errors that can abort `detect_drift`.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Detection error in feature {feature}: {source}")]
    Feature {
        feature: String,
        #[source]
        source: DetectionError,
    },

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for DriftError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Selection(e) => e.error_code(),
            Self::Feature { source, .. } => source.error_code(),
            Self::Detection(e) => e.error_code(),
            Self::Table(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
