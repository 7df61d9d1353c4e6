//! Time-cutoff selection errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while building a time-based selector.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid cutoff {value:?}: {message}")]
    InvalidArgumentType { value: String, message: String },

    #[error("time_cutoffs should contain at least one date/timestamp")]
    EmptyInput,

    #[error("Cutoff at index {index} ({current}) is not after its predecessor ({previous})")]
    UnorderedCutoffs {
        index: usize,
        previous: String,
        current: String,
    },

    #[error("At least one value column is required")]
    NoValueColumns,
}

impl ErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgumentType { .. } => error_code::INVALID_ARGUMENT_TYPE,
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::UnorderedCutoffs { .. } => error_code::UNORDERED_CUTOFFS,
            Self::NoValueColumns => error_code::SELECTION_ERROR,
        }
    }
}
