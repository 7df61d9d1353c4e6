//! Cressie-Read power divergence goodness-of-fit test.
//!
//! λ selects the member of the family (1 = Pearson chi-squared,
//! 0 = log-likelihood G-test, -1/2 = Freeman-Tukey, -1 = modified
//! log-likelihood, -2 = Neyman, 2/3 = Cressie-Read). The reference
//! distribution is chi-squared with `k - 1` degrees of freedom.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use super::types::TestOutcome;

/// Test observed counts against expected counts.
///
/// `expected` is rescaled to the observed total before the statistic is
/// computed, so raw counts from two differently sized samples can be passed
/// directly. Fewer than two categories leave nothing to test.
pub fn power_divergence(observed: &[f64], expected: &[f64], lambda: f64) -> TestOutcome {
    let k = observed.len().min(expected.len());
    if k < 2 {
        return TestOutcome::indistinguishable(0.0);
    }

    let observed_total: f64 = observed[..k].iter().sum();
    let expected_total: f64 = expected[..k].iter().sum();
    if observed_total <= 0.0 || expected_total <= 0.0 {
        return TestOutcome::indistinguishable(0.0);
    }
    let scale = observed_total / expected_total;

    let statistic: f64 = observed[..k]
        .iter()
        .zip(&expected[..k])
        .map(|(&obs, &exp)| divergence_term(obs, exp * scale, lambda))
        .sum();

    TestOutcome {
        statistic,
        p_value: chi_squared_sf(statistic, (k - 1) as f64),
    }
}

/// Contribution of one category to the power divergence statistic.
fn divergence_term(obs: f64, exp: f64, lambda: f64) -> f64 {
    if lambda.abs() < f64::EPSILON {
        2.0 * xlogy(obs, obs / exp)
    } else if (lambda + 1.0).abs() < f64::EPSILON {
        2.0 * xlogy(exp, exp / obs)
    } else {
        2.0 / (lambda * (lambda + 1.0)) * obs * ((obs / exp).powf(lambda) - 1.0)
    }
}

/// `x * ln(y)`, defined as 0 when `x == 0`.
fn xlogy(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * y.ln()
    }
}

fn chi_squared_sf(statistic: f64, df: f64) -> f64 {
    if statistic.is_nan() {
        return 1.0;
    }
    if statistic.is_infinite() {
        return 0.0;
    }
    match ChiSquared::new(df) {
        Ok(dist) => dist.sf(statistic.max(0.0)).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_reversed_proportions() {
        // observed [1, 3] against expected [3, 1]: chi2 = 4/3 + 4.
        let outcome = power_divergence(&[1.0, 3.0], &[3.0, 1.0], 1.0);
        assert!((outcome.statistic - 16.0 / 3.0).abs() < 1e-9);
        assert!((outcome.p_value - 0.02092).abs() < 1e-4, "p = {}", outcome.p_value);
    }

    #[test]
    fn test_expected_is_rescaled() {
        let small = power_divergence(&[10.0, 30.0], &[1.0, 3.0], 1.0);
        assert!(small.statistic.abs() < 1e-12);
        assert_eq!(small.p_value, 1.0);
    }

    #[test]
    fn test_log_likelihood() {
        // G = 2 * (1 ln(1/3) + 3 ln(3/1)) = 4 ln 3
        let outcome = power_divergence(&[1.0, 3.0], &[3.0, 1.0], 0.0);
        assert!((outcome.statistic - 4.0 * 3f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_mod_log_likelihood_zero_observed() {
        let outcome = power_divergence(&[0.0, 4.0], &[2.0, 2.0], -1.0);
        assert!(outcome.statistic.is_infinite());
        assert_eq!(outcome.p_value, 0.0);
    }

    #[test]
    fn test_single_category() {
        let outcome = power_divergence(&[5.0], &[9.0], 1.0);
        assert_eq!(outcome.p_value, 1.0);
    }
}
