//! Detection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATEGORICAL_TEST, DEFAULT_NUMERICAL_TEST, DEFAULT_SIGNIFICANCE};

/// Configuration for the drift comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectionConfig {
    /// p-value threshold. Default: 0.05.
    pub significance: Option<f64>,
    /// Numerical test identifier (`mw` or `ks`). Default: `mw`.
    pub numerical_test: Option<String>,
    /// Categorical test identifier (power-divergence family). Default: `pearson`.
    pub categorical_test: Option<String>,
    /// Columns compared as categorical; every other feature is numerical.
    #[serde(default)]
    pub categorical_columns: Vec<String>,
    /// Evaluate period pairs and features on the rayon pool. Default: false.
    pub parallel: Option<bool>,
}

impl DetectionConfig {
    /// Returns the effective significance, defaulting to 0.05.
    pub fn effective_significance(&self) -> f64 {
        self.significance.unwrap_or(DEFAULT_SIGNIFICANCE)
    }

    /// Returns the effective numerical test identifier, defaulting to `mw`.
    pub fn effective_numerical_test(&self) -> &str {
        self.numerical_test
            .as_deref()
            .unwrap_or(DEFAULT_NUMERICAL_TEST)
    }

    /// Returns the effective categorical test identifier, defaulting to `pearson`.
    pub fn effective_categorical_test(&self) -> &str {
        self.categorical_test
            .as_deref()
            .unwrap_or(DEFAULT_CATEGORICAL_TEST)
    }

    /// Returns whether parallel evaluation is enabled, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
