//! Top-level driftwatch configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DetectionConfig, SelectionConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::types::parse_timestamp;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`DRIFTWATCH_*`)
/// 3. Project config (`driftwatch.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DriftwatchConfig {
    pub detection: DetectionConfig,
    pub selection: SelectionConfig,
}

/// Override values that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub significance: Option<f64>,
    pub numerical_test: Option<String>,
    pub categorical_test: Option<String>,
    pub parallel: Option<bool>,
}

impl DriftwatchConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        ::tracing::debug!(
            significance = config.detection.effective_significance(),
            cutoffs = config.selection.time_cutoffs.len(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Malformed {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DriftwatchConfig) -> Result<(), ConfigError> {
        if let Some(significance) = config.detection.significance {
            if !(significance > 0.0 && significance < 1.0) {
                return Err(ConfigError::OutOfRange {
                    field: "detection.significance",
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(ref name) = config.detection.numerical_test {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "detection.numerical_test",
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref name) = config.detection.categorical_test {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "detection.categorical_test",
                    message: "must not be empty".to_string(),
                });
            }
        }
        for cutoff in &config.selection.time_cutoffs {
            parse_timestamp(cutoff).map_err(|e| ConfigError::InvalidValue {
                field: "selection.time_cutoffs",
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DriftwatchConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        let file_config: DriftwatchConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Malformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut DriftwatchConfig, other: &DriftwatchConfig) {
        // Detection
        if other.detection.significance.is_some() {
            base.detection.significance = other.detection.significance;
        }
        if other.detection.numerical_test.is_some() {
            base.detection.numerical_test = other.detection.numerical_test.clone();
        }
        if other.detection.categorical_test.is_some() {
            base.detection.categorical_test = other.detection.categorical_test.clone();
        }
        if !other.detection.categorical_columns.is_empty() {
            base.detection.categorical_columns = other.detection.categorical_columns.clone();
        }
        if other.detection.parallel.is_some() {
            base.detection.parallel = other.detection.parallel;
        }

        // Selection
        if other.selection.splitting_column.is_some() {
            base.selection.splitting_column = other.selection.splitting_column.clone();
        }
        if !other.selection.time_cutoffs.is_empty() {
            base.selection.time_cutoffs = other.selection.time_cutoffs.clone();
        }
        if !other.selection.value_columns.is_empty() {
            base.selection.value_columns = other.selection.value_columns.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut DriftwatchConfig) {
        if let Ok(val) = std::env::var("DRIFTWATCH_SIGNIFICANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.detection.significance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DRIFTWATCH_NUMERICAL_TEST") {
            config.detection.numerical_test = Some(val);
        }
        if let Ok(val) = std::env::var("DRIFTWATCH_CATEGORICAL_TEST") {
            config.detection.categorical_test = Some(val);
        }
        if let Ok(val) = std::env::var("DRIFTWATCH_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.detection.parallel = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut DriftwatchConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.significance {
            config.detection.significance = Some(v);
        }
        if let Some(ref v) = overrides.numerical_test {
            config.detection.numerical_test = Some(v.clone());
        }
        if let Some(ref v) = overrides.categorical_test {
            config.detection.categorical_test = Some(v.clone());
        }
        if let Some(v) = overrides.parallel {
            config.detection.parallel = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
