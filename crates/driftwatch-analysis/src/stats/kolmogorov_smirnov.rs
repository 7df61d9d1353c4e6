//! Two-sample Kolmogorov-Smirnov test (two-sided).
//!
//! D is the largest gap between the two empirical CDFs. The p-value uses the
//! asymptotic Kolmogorov distribution with Stephens' small-sample correction.

use std::cmp::Ordering;

use super::types::TestOutcome;

/// Two-sided two-sample KS test. Both samples must be non-empty and free of NaN.
pub fn ks_2samp(x: &[f64], y: &[f64]) -> TestOutcome {
    let mut a = x.to_vec();
    let mut b = y.to_vec();
    a.sort_by(|l, r| l.partial_cmp(r).unwrap_or(Ordering::Equal));
    b.sort_by(|l, r| l.partial_cmp(r).unwrap_or(Ordering::Equal));

    let d = ks_statistic(&a, &b);
    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let en = (n1 * n2 / (n1 + n2)).sqrt();
    let lambda = (en + 0.12 + 0.11 / en) * d;

    TestOutcome {
        statistic: d,
        p_value: kolmogorov_q(lambda),
    }
}

/// Maximum absolute difference between the empirical CDFs of two sorted samples.
fn ks_statistic(a: &[f64], b: &[f64]) -> f64 {
    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let (mut i, mut j) = (0, 0);
    let mut d = 0.0_f64;

    while i < a.len() && j < b.len() {
        let v = a[i].min(b[j]);
        // Step past every copy of v on both sides so ties move together.
        while i < a.len() && a[i] <= v {
            i += 1;
        }
        while j < b.len() && b[j] <= v {
            j += 1;
        }
        d = d.max((i as f64 / n1 - j as f64 / n2).abs());
    }
    d
}

/// Survival function of the Kolmogorov distribution:
/// `Q(λ) = 2 Σ_{k≥1} (-1)^(k-1) exp(-2 k² λ²)`.
///
/// Returns 1.0 when the series does not converge (λ close to zero).
fn kolmogorov_q(lambda: f64) -> f64 {
    const EPS_TERM: f64 = 1e-3;
    const EPS_SUM: f64 = 1e-8;

    let a2 = -2.0 * lambda * lambda;
    let mut sign = 2.0;
    let mut sum = 0.0;
    let mut previous_term = 0.0;

    for k in 1..=100 {
        let k = f64::from(k);
        let term = sign * (a2 * k * k).exp();
        sum += term;
        if term.abs() <= EPS_TERM * previous_term || term.abs() <= EPS_SUM * sum {
            return sum.clamp(0.0, 1.0);
        }
        sign = -sign;
        previous_term = term.abs();
    }
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let outcome = ks_2samp(&a, &a);
        assert_eq!(outcome.statistic, 0.0);
        assert_eq!(outcome.p_value, 1.0);
    }

    #[test]
    fn test_disjoint_samples() {
        let a: Vec<f64> = (0..200).map(f64::from).collect();
        let b: Vec<f64> = (500..700).map(f64::from).collect();
        let outcome = ks_2samp(&a, &b);
        assert_eq!(outcome.statistic, 1.0);
        assert!(outcome.p_value < 1e-10);
    }

    #[test]
    fn test_statistic_with_ties() {
        // ECDF gap is largest after 2: a is at 3/4, b at 1/4.
        let d = ks_statistic(&[1.0, 2.0, 2.0, 5.0], &[2.0, 3.0, 4.0, 5.0]);
        assert!((d - 0.5).abs() < 1e-12, "d = {d}");
    }

    #[test]
    fn test_statistic_is_symmetric() {
        let a = [0.1, 0.4, 0.5, 0.9];
        let b = [0.2, 0.3, 0.8];
        assert_eq!(ks_statistic(&a, &b), ks_statistic(&b, &a));
    }

    #[test]
    fn test_q_bounds() {
        assert_eq!(kolmogorov_q(0.0), 1.0);
        assert!(kolmogorov_q(5.0) < 1e-10);
        // Q(1.0) ≈ 0.2700
        assert!((kolmogorov_q(1.0) - 0.2700).abs() < 1e-3);
    }
}
