//! Mann-Whitney U test (two-sided, normal approximation).
//!
//! Ties get average ranks; the variance carries the tie correction and the
//! z-score a 0.5 continuity correction.

use std::cmp::Ordering;

use statrs::function::erf::erfc;

use super::types::TestOutcome;

/// Two-sided Mann-Whitney U test of `x` against `y`.
///
/// The reported statistic is U for `x`. Both samples must be non-empty and
/// free of NaN.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> TestOutcome {
    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let n = n1 + n2;

    let (rank_sum_x, tie_term) = rank_sum_and_ties(x, y);
    let u1 = rank_sum_x - n1 * (n1 + 1.0) / 2.0;
    let u2 = n1 * n2 - u1;
    let u = u1.max(u2);

    let mu = n1 * n2 / 2.0;
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if !variance.is_finite() || variance <= 0.0 {
        // Every value identical: ranks carry no information.
        return TestOutcome::indistinguishable(u1);
    }

    let z = (u - mu - 0.5) / variance.sqrt();
    let p_value = (2.0 * normal_sf(z)).clamp(0.0, 1.0);
    TestOutcome {
        statistic: u1,
        p_value,
    }
}

/// Sum of the ranks of `x` in the pooled sample, and `Σ (t³ - t)` over tie groups.
fn rank_sum_and_ties(x: &[f64], y: &[f64]) -> (f64, f64) {
    let mut pooled: Vec<(f64, bool)> = x
        .iter()
        .map(|&v| (v, true))
        .chain(y.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut rank_sum_x = 0.0;
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < pooled.len() {
        let mut end = start + 1;
        while end < pooled.len() && pooled[end].0 == pooled[start].0 {
            end += 1;
        }
        // Ranks are 1-based; the group spans ranks start+1..=end.
        let avg_rank = (start + 1 + end) as f64 / 2.0;
        let from_x = pooled[start..end].iter().filter(|(_, is_x)| *is_x).count();
        rank_sum_x += avg_rank * from_x as f64;

        let t = (end - start) as f64;
        tie_term += t * t * t - t;
        start = end;
    }
    (rank_sum_x, tie_term)
}

/// Upper tail of the standard normal distribution.
fn normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let outcome = mann_whitney_u(&a, &a);
        assert_eq!(outcome.statistic, 12.5);
        assert_eq!(outcome.p_value, 1.0);
    }

    #[test]
    fn test_separated_samples() {
        let a: Vec<f64> = (0..50).map(f64::from).collect();
        let b: Vec<f64> = (100..150).map(f64::from).collect();
        let outcome = mann_whitney_u(&a, &b);
        assert_eq!(outcome.statistic, 0.0);
        assert!(outcome.p_value < 1e-10, "p = {}", outcome.p_value);
    }

    #[test]
    fn test_all_values_tied() {
        let outcome = mann_whitney_u(&[3.0; 10], &[3.0; 7]);
        assert_eq!(outcome.p_value, 1.0);
    }

    #[test]
    fn test_ties_use_average_ranks() {
        // Pooled: 1(x) 2(x) 2(y) 3(y) -> ranks 1, 2.5, 2.5, 4.
        let (rank_sum_x, tie_term) = rank_sum_and_ties(&[1.0, 2.0], &[2.0, 3.0]);
        assert_eq!(rank_sum_x, 3.5);
        assert_eq!(tie_term, 6.0);
    }

    #[test]
    fn test_known_p_value() {
        // U = 17, z = (17 - 10 - 0.5) / sqrt(50 / 3).
        let x = [19.0, 22.0, 16.0, 29.0, 24.0];
        let y = [20.0, 11.0, 17.0, 12.0];
        let outcome = mann_whitney_u(&x, &y);
        assert_eq!(outcome.statistic, 17.0);
        assert!((outcome.p_value - 0.1114).abs() < 1e-3, "p = {}", outcome.p_value);
    }
}
