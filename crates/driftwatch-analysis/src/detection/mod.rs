//! Distribution drift detection.
//!
//! Numerical features are compared with Mann-Whitney U or Kolmogorov-Smirnov,
//! categorical features with a power-divergence test on the categories both
//! samples share. [`DistributionDrift::detect_drift`] runs these comparisons
//! over every pair of consecutive time periods.

pub mod categorical;
pub mod distribution;
pub mod numerical;
pub mod types;

pub use categorical::{
    check_missing_values, compare_two_categorical_distributions, create_frequency_arrays,
    deprecated_categories, missing_rate, new_categories,
};
pub use distribution::{DistributionDrift, DriftRequest};
pub use numerical::compare_two_numerical_distributions;
pub use types::{
    CategoricalTest, CategoryChange, ComparisonOutcome, DetectionRun, DriftAlert, FeatureKind,
    FeatureSample, NumericalTest, TestSelection,
};
