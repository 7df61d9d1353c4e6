//! Table access errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while building or reading a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column {name} is {actual}, expected {expected}")]
    ColumnTypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Column {name} has {actual} rows, table has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
}

impl ErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        error_code::TABLE_ERROR
    }
}
