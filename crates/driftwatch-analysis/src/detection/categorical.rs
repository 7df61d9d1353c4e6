//! Categorical comparison: missing-value sanity check, category-set
//! differences, and the power-divergence test on shared categories.

use std::hash::Hash;

use driftwatch_core::errors::DetectionError;
use driftwatch_core::types::{FxHashMap, FxHashSet};

use super::types::CategoricalTest;
use crate::stats::{power_divergence, TestOutcome};

/// Fraction of missing markers in `sample` (0.0 for an empty sample).
pub fn missing_rate<T>(sample: &[Option<T>]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().filter(|v| v.is_none()).count() as f64 / sample.len() as f64
}

/// Reject samples whose missing-value rates diverge.
///
/// With both rates nonzero, either may exceed the other by at most a factor
/// of `1 + significance`. With one rate zero, the other may not exceed
/// `significance`.
pub fn check_missing_values<T>(
    baseline: &[Option<T>],
    new: &[Option<T>],
    significance: f64,
) -> Result<(), DetectionError> {
    let baseline_rate = missing_rate(baseline);
    let new_rate = missing_rate(new);

    let excessive = if baseline_rate > 0.0 && new_rate > 0.0 {
        baseline_rate > new_rate * (1.0 + significance)
            || new_rate > baseline_rate * (1.0 + significance)
    } else {
        baseline_rate > significance || new_rate > significance
    };

    if excessive {
        return Err(DetectionError::ExcessiveMissingValues {
            baseline_rate,
            new_rate,
            significance,
        });
    }
    Ok(())
}

/// Distinct non-missing values of `new` that never occur in `baseline`,
/// in first-occurrence order of `new`.
pub fn new_categories<T: Eq + Hash + Clone>(baseline: &[Option<T>], new: &[Option<T>]) -> Vec<T> {
    categories_only_in(new, baseline)
}

/// Distinct non-missing values of `baseline` that never occur in `new`,
/// in first-occurrence order of `baseline`.
pub fn deprecated_categories<T: Eq + Hash + Clone>(
    baseline: &[Option<T>],
    new: &[Option<T>],
) -> Vec<T> {
    categories_only_in(baseline, new)
}

fn categories_only_in<T: Eq + Hash + Clone>(source: &[Option<T>], other: &[Option<T>]) -> Vec<T> {
    let other: FxHashSet<&T> = other.iter().flatten().collect();
    let mut seen: FxHashSet<&T> = FxHashSet::default();
    source
        .iter()
        .flatten()
        .filter(|cat| !other.contains(cat) && seen.insert(*cat))
        .cloned()
        .collect()
}

/// Per-category counts for the categories present in both samples.
///
/// Both arrays share one ordering: first occurrence in `baseline`. Missing
/// markers are never counted.
pub fn create_frequency_arrays<T: Eq + Hash>(
    baseline: &[Option<T>],
    new: &[Option<T>],
) -> (Vec<u64>, Vec<u64>) {
    let new_counts = count(new);
    let baseline_counts = count(baseline);

    let mut seen: FxHashSet<&T> = FxHashSet::default();
    let mut base_freq = Vec::new();
    let mut new_freq = Vec::new();
    for cat in baseline.iter().flatten() {
        if !seen.insert(cat) {
            continue;
        }
        if let Some(&n) = new_counts.get(cat) {
            base_freq.push(baseline_counts[cat]);
            new_freq.push(n);
        }
    }
    (base_freq, new_freq)
}

fn count<T: Eq + Hash>(sample: &[Option<T>]) -> FxHashMap<&T, u64> {
    let mut counts: FxHashMap<&T, u64> = FxHashMap::default();
    for cat in sample.iter().flatten() {
        *counts.entry(cat).or_insert(0) += 1;
    }
    counts
}

/// Run the missing-value check and the divergence test, returning the raw
/// test outcome.
pub fn evaluate_categorical<T: Eq + Hash>(
    baseline: &[Option<T>],
    new: &[Option<T>],
    test: CategoricalTest,
    significance: f64,
) -> Result<TestOutcome, DetectionError> {
    if baseline.is_empty() {
        return Err(DetectionError::EmptySample { side: "baseline" });
    }
    if new.is_empty() {
        return Err(DetectionError::EmptySample { side: "new" });
    }
    check_missing_values(baseline, new, significance)?;

    let (base_freq, new_freq) = create_frequency_arrays(baseline, new);
    if base_freq.len() < 2 {
        tracing::warn!(
            shared_categories = base_freq.len(),
            test = test.name(),
            "too few shared categories for a divergence test"
        );
    }

    let observed: Vec<f64> = new_freq.iter().map(|&n| n as f64).collect();
    let expected: Vec<f64> = base_freq.iter().map(|&n| n as f64).collect();
    Ok(power_divergence(&observed, &expected, test.lambda()))
}

/// Whether the category proportions shared by both samples differ
/// significantly.
pub fn compare_two_categorical_distributions<T: Eq + Hash>(
    baseline: &[Option<T>],
    new: &[Option<T>],
    test: CategoricalTest,
    significance: f64,
) -> Result<bool, DetectionError> {
    Ok(evaluate_categorical(baseline, new, test, significance)?.is_significant(significance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn with_missing(present: &[&str], missing: usize) -> Vec<Option<String>> {
        let mut sample = cats(present);
        sample.extend(std::iter::repeat(None).take(missing));
        sample
    }

    #[test]
    fn test_new_and_deprecated_categories() {
        let baseline = cats(&["a", "b"]);
        let new = cats(&["b", "c"]);
        assert_eq!(new_categories(&baseline, &new), vec!["c".to_string()]);
        assert_eq!(deprecated_categories(&baseline, &new), vec!["a".to_string()]);
    }

    #[test]
    fn test_category_helpers_are_distinct_and_ordered() {
        let baseline = cats(&["a"]);
        let new = cats(&["z", "b", "z", "a", "b"]);
        assert_eq!(new_categories(&baseline, &new), vec!["z".to_string(), "b".to_string()]);
        assert!(deprecated_categories(&baseline, &new).is_empty());
    }

    #[test]
    fn test_category_helpers_ignore_missing() {
        let baseline = with_missing(&["a"], 2);
        let new = cats(&["a"]);
        assert!(deprecated_categories(&baseline, &new).is_empty());
        assert!(new_categories(&new, &baseline).is_empty());
    }

    #[test]
    fn test_frequency_arrays_use_baseline_order_and_intersection() {
        let baseline = cats(&["b", "a", "b", "x", "a", "b"]);
        let new = cats(&["a", "y", "b", "a"]);
        let (base, new) = create_frequency_arrays(&baseline, &new);
        assert_eq!(base, vec![3, 2]);
        assert_eq!(new, vec![1, 2]);
    }

    #[test]
    fn test_missing_zero_vs_ten_percent() {
        let baseline = cats(&["a"; 10]);
        let new = with_missing(&["a"; 9], 1);
        let err = check_missing_values(&baseline, &new, 0.05).unwrap_err();
        assert!(matches!(err, DetectionError::ExcessiveMissingValues { .. }));
    }

    #[test]
    fn test_missing_both_zero() {
        let sample = cats(&["a", "b"]);
        assert!(check_missing_values(&sample, &sample, 0.05).is_ok());
    }

    #[test]
    fn test_missing_rate_asymmetry() {
        // 10% vs 20%: 0.2 > 0.1 * 1.05
        let baseline = with_missing(&["a"; 9], 1);
        let new = with_missing(&["a"; 8], 2);
        assert!(check_missing_values(&baseline, &new, 0.05).is_err());

        // 10% vs 10%: within tolerance
        assert!(check_missing_values(&baseline, &baseline, 0.05).is_ok());
    }

    #[test]
    fn test_missing_below_significance_tolerated() {
        // 0% vs 4%
        let baseline = cats(&["a"; 25]);
        let new = with_missing(&["a"; 24], 1);
        assert!(check_missing_values(&baseline, &new, 0.05).is_ok());
    }

    #[test]
    fn test_reversed_proportions_drift() {
        let baseline = cats(&["a", "a", "a", "b"]);
        let new = cats(&["a", "b", "b", "b"]);
        assert!(
            compare_two_categorical_distributions(&baseline, &new, CategoricalTest::Pearson, 0.05)
                .unwrap()
        );
    }

    #[test]
    fn test_same_proportions_no_drift() {
        let baseline = cats(&["a", "b", "a", "b"]);
        let new = cats(&["b", "a", "b", "a", "c"]);
        for test in CategoricalTest::ALL {
            assert!(!compare_two_categorical_distributions(&baseline, &new, test, 0.05).unwrap());
        }
    }

    #[test]
    fn test_empty_sample_rejected() {
        let err = evaluate_categorical::<String>(&[], &cats(&["a"]), CategoricalTest::Pearson, 0.05)
            .unwrap_err();
        assert!(matches!(err, DetectionError::EmptySample { side: "baseline" }));
    }
}
