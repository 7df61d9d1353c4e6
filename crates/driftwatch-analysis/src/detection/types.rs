//! Core types for distribution drift detection.

use std::fmt;
use std::str::FromStr;

use driftwatch_core::errors::{DetectionError, TableError};
use driftwatch_core::types::Timestamp;
use serde::Serialize;

use crate::stats::TestOutcome;
use crate::table::Column;

/// Two-sample test used for numerical features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NumericalTest {
    /// Mann-Whitney U.
    #[default]
    MannWhitney,
    /// Kolmogorov-Smirnov.
    KolmogorovSmirnov,
}

impl NumericalTest {
    pub const ALL: [NumericalTest; 2] = [Self::MannWhitney, Self::KolmogorovSmirnov];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MannWhitney => "mw",
            Self::KolmogorovSmirnov => "ks",
        }
    }
}

impl FromStr for NumericalTest {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|test| test.name() == s.trim())
            .ok_or_else(|| DetectionError::InvalidTestName {
                kind: "numerical",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for NumericalTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Member of the power-divergence family used for categorical features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CategoricalTest {
    /// Pearson's chi-squared (λ = 1).
    #[default]
    Pearson,
    /// G-test (λ = 0).
    LogLikelihood,
    /// Freeman-Tukey (λ = -1/2).
    FreemanTukey,
    /// Modified log-likelihood (λ = -1).
    ModLogLikelihood,
    /// Neyman's modified chi-squared (λ = -2).
    Neyman,
    /// Cressie-Read (λ = 2/3).
    CressieRead,
}

impl CategoricalTest {
    pub const ALL: [CategoricalTest; 6] = [
        Self::Pearson,
        Self::LogLikelihood,
        Self::FreemanTukey,
        Self::ModLogLikelihood,
        Self::Neyman,
        Self::CressieRead,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::LogLikelihood => "log-likelihood",
            Self::FreemanTukey => "freeman-tukey",
            Self::ModLogLikelihood => "mod-log-likelihood",
            Self::Neyman => "neyman",
            Self::CressieRead => "cressie-read",
        }
    }

    /// Power-divergence exponent λ.
    pub fn lambda(&self) -> f64 {
        match self {
            Self::Pearson => 1.0,
            Self::LogLikelihood => 0.0,
            Self::FreemanTukey => -0.5,
            Self::ModLogLikelihood => -1.0,
            Self::Neyman => -2.0,
            Self::CressieRead => 2.0 / 3.0,
        }
    }
}

impl FromStr for CategoricalTest {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|test| test.name() == s.trim())
            .ok_or_else(|| DetectionError::InvalidTestName {
                kind: "categorical",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for CategoricalTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tests to run for each kind of feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestSelection {
    pub numerical: NumericalTest,
    pub categorical: CategoricalTest,
}

/// Caller-declared kind of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Numerical,
    Categorical,
}

impl FeatureKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numerical => "numerical",
            Self::Categorical => "categorical",
        }
    }
}

/// One side of a comparison, already resolved to its feature kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureSample {
    /// Numeric values; NaN marks a missing value.
    Numerical(Vec<f64>),
    /// Category tokens; `None` marks a missing value.
    Categorical(Vec<Option<String>>),
}

impl FeatureSample {
    /// Extract a sample of the given kind from a column.
    ///
    /// Numeric columns may be read as categorical (each value becomes its
    /// textual form); categorical columns cannot be read as numerical.
    pub fn from_column(name: &str, column: &Column, kind: FeatureKind) -> Result<Self, TableError> {
        match (kind, column) {
            (FeatureKind::Numerical, Column::Numeric(values)) => Ok(Self::Numerical(
                values.iter().map(|v| v.unwrap_or(f64::NAN)).collect(),
            )),
            (FeatureKind::Categorical, Column::Categorical(values)) => {
                Ok(Self::Categorical(values.clone()))
            }
            (FeatureKind::Categorical, Column::Numeric(values)) => Ok(Self::Categorical(
                values
                    .iter()
                    .map(|v| v.filter(|x| !x.is_nan()).map(|x| x.to_string()))
                    .collect(),
            )),
            (kind, other) => Err(TableError::ColumnTypeMismatch {
                name: name.to_string(),
                expected: kind.name(),
                actual: other.type_name(),
            }),
        }
    }

    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Numerical(_) => FeatureKind::Numerical,
            Self::Categorical(_) => FeatureKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numerical(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of one two-sample comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonOutcome {
    pub drifted: bool,
    pub test: &'static str,
    pub statistic: f64,
    pub p_value: f64,
}

impl ComparisonOutcome {
    pub fn from_test(test: &'static str, outcome: TestOutcome, significance: f64) -> Self {
        Self {
            drifted: outcome.is_significant(significance),
            test,
            statistic: outcome.statistic,
            p_value: outcome.p_value,
        }
    }
}

/// A detected drift in one feature across one period boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftAlert {
    pub feature: String,
    /// Boundary between the two compared periods.
    pub time_cutoff: Timestamp,
    /// Cutoff closing the later period.
    pub window_end: Timestamp,
    pub kind: FeatureKind,
    pub test: &'static str,
    pub statistic: f64,
    pub p_value: f64,
}

/// Categories that appeared or disappeared across one period boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChange {
    pub feature: String,
    pub time_cutoff: Timestamp,
    pub new_categories: Vec<String>,
    pub deprecated_categories: Vec<String>,
}

/// Everything one `detect_drift` call produced.
///
/// Runs are plain values: accumulate across calls with [`DetectionRun::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetectionRun {
    pub alerts: Vec<DriftAlert>,
    pub category_changes: Vec<CategoryChange>,
    /// Number of feature comparisons performed.
    pub comparisons: usize,
}

impl DetectionRun {
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    pub fn has_drift(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Distinct drifted feature names, in first-alert order.
    pub fn drifted_features(&self) -> Vec<&str> {
        let mut features: Vec<&str> = Vec::new();
        for alert in &self.alerts {
            if !features.contains(&alert.feature.as_str()) {
                features.push(&alert.feature);
            }
        }
        features
    }

    /// Alerts raised for `feature`.
    pub fn alerts_for<'a>(&'a self, feature: &'a str) -> impl Iterator<Item = &'a DriftAlert> + 'a {
        self.alerts.iter().filter(move |alert| alert.feature == feature)
    }

    /// Append another run's results after this one's.
    pub fn merge(&mut self, other: DetectionRun) {
        self.alerts.extend(other.alerts);
        self.category_changes.extend(other.category_changes);
        self.comparisons += other.comparisons;
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
