//! Error handling for driftwatch.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detection_error;
pub mod drift_error;
pub mod error_code;
pub mod selection_error;
pub mod table_error;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use drift_error::DriftError;
pub use error_code::ErrorCode;
pub use selection_error::SelectionError;
pub use table_error::TableError;
