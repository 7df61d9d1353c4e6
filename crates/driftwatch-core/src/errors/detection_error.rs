//! Drift detection errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while comparing two samples.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Not a valid {kind} test name: {name}")]
    InvalidTestName { kind: &'static str, name: String },

    #[error(
        "Missing value rates differ too much: baseline {baseline_rate:.4}, \
         new {new_rate:.4} (significance {significance})"
    )]
    ExcessiveMissingValues {
        baseline_rate: f64,
        new_rate: f64,
        significance: f64,
    },

    #[error("The {side} sample has no usable values")]
    EmptySample { side: &'static str },

    #[error("Baseline is {baseline} but new sample is {new}")]
    MismatchedFeatureKinds {
        baseline: &'static str,
        new: &'static str,
    },

    #[error("Significance must be in (0, 1), got {0}")]
    InvalidSignificance(f64),
}

impl ErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTestName { .. } => error_code::INVALID_TEST_NAME,
            Self::ExcessiveMissingValues { .. } => error_code::EXCESSIVE_MISSING_VALUES,
            _ => error_code::DETECTION_ERROR,
        }
    }
}
