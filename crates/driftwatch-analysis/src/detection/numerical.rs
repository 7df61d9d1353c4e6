//! Numerical comparison via Mann-Whitney U or Kolmogorov-Smirnov.

use driftwatch_core::errors::DetectionError;

use super::types::NumericalTest;
use crate::stats::{ks_2samp, mann_whitney_u, TestOutcome};

/// Run the two-sided `test` on both samples, ignoring NaN values.
pub fn evaluate_numerical(
    baseline: &[f64],
    new: &[f64],
    test: NumericalTest,
) -> Result<TestOutcome, DetectionError> {
    let baseline = present_values(baseline);
    let new = present_values(new);
    if baseline.is_empty() {
        return Err(DetectionError::EmptySample { side: "baseline" });
    }
    if new.is_empty() {
        return Err(DetectionError::EmptySample { side: "new" });
    }

    Ok(match test {
        NumericalTest::MannWhitney => mann_whitney_u(&baseline, &new),
        NumericalTest::KolmogorovSmirnov => ks_2samp(&baseline, &new),
    })
}

/// Whether the two samples differ significantly under `test`.
pub fn compare_two_numerical_distributions(
    baseline: &[f64],
    new: &[f64],
    test: NumericalTest,
    significance: f64,
) -> Result<bool, DetectionError> {
    Ok(evaluate_numerical(baseline, new, test)?.is_significant(significance))
}

fn present_values(sample: &[f64]) -> Vec<f64> {
    sample.iter().copied().filter(|v| !v.is_nan()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples_never_drift() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        for test in NumericalTest::ALL {
            assert!(!compare_two_numerical_distributions(&sample, &sample, test, 0.05).unwrap());
        }
    }

    #[test]
    fn test_shifted_samples_drift() {
        let baseline: Vec<f64> = (0..300).map(|i| f64::from(i) / 100.0).collect();
        let new: Vec<f64> = baseline.iter().map(|v| v + 2.0).collect();
        for test in NumericalTest::ALL {
            assert!(compare_two_numerical_distributions(&baseline, &new, test, 0.05).unwrap());
        }
    }

    #[test]
    fn test_nan_values_ignored() {
        let baseline = [1.0, f64::NAN, 2.0, 3.0];
        let new = [1.0, 2.0, 3.0, f64::NAN];
        let outcome = evaluate_numerical(&baseline, &new, NumericalTest::MannWhitney).unwrap();
        assert_eq!(outcome.p_value, 1.0);
    }

    #[test]
    fn test_all_missing_is_an_error() {
        let err = evaluate_numerical(&[1.0], &[f64::NAN], NumericalTest::KolmogorovSmirnov)
            .unwrap_err();
        assert!(matches!(err, DetectionError::EmptySample { side: "new" }));
    }
}
