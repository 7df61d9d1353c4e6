//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a stable code string that
/// callers can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SELECTION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ARGUMENT_TYPE: &str = "INVALID_ARGUMENT_TYPE";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const UNORDERED_CUTOFFS: &str = "UNORDERED_CUTOFFS";
pub const SELECTION_ERROR: &str = "SELECTION_ERROR";
pub const INVALID_TEST_NAME: &str = "INVALID_TEST_NAME";
pub const EXCESSIVE_MISSING_VALUES: &str = "EXCESSIVE_MISSING_VALUES";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const TABLE_ERROR: &str = "TABLE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
