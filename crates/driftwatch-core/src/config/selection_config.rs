//! Time-window selection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SPLITTING_COLUMN;

/// Configuration for splitting a table into time periods.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Timestamp column used for bucketing. Default: `date`.
    pub splitting_column: Option<String>,
    /// Strictly increasing cutoffs, each `YYYY-MM-DD` or a full timestamp.
    #[serde(default)]
    pub time_cutoffs: Vec<String>,
    /// Feature columns to compare across periods.
    #[serde(default)]
    pub value_columns: Vec<String>,
}

impl SelectionConfig {
    /// Returns the effective splitting column, defaulting to `date`.
    pub fn effective_splitting_column(&self) -> &str {
        self.splitting_column
            .as_deref()
            .unwrap_or(DEFAULT_SPLITTING_COLUMN)
    }
}
