//! Shared constants for the driftwatch engine.

/// driftwatch version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default p-value threshold below which a comparison is declared drift.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Default numerical test identifier (Mann-Whitney U).
pub const DEFAULT_NUMERICAL_TEST: &str = "mw";

/// Default categorical test identifier (Pearson's chi-squared).
pub const DEFAULT_CATEGORICAL_TEST: &str = "pearson";

/// Default name of the timestamp column used for bucketing.
pub const DEFAULT_SPLITTING_COLUMN: &str = "date";

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "driftwatch.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "DRIFTWATCH_LOG";

/// Log filter used when `DRIFTWATCH_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "driftwatch_core=info,driftwatch_analysis=info";

/// Timestamp formats accepted for cutoffs given as text, tried in order.
pub const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Date-only format accepted for cutoffs given as text (midnight is implied).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
