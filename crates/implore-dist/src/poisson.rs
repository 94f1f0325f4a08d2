//! Poisson distribution
//!
//! No check is made that `lambda > 0`; that is left to the caller.

use crate::combinatorics::{factorial_unchecked, ln_factorial};

/// P(X = x) for X ~ Poisson(lambda)
///
/// `lambda^x * e^(-lambda) / x!`, or 0 for negative `x`. When `lambda^x`
/// or `x!` overflows (around `x > 150` for `lambda = 100`) the term is
/// computed in log space instead.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn poisson_pmf(lambda: f64, x: i64) -> f64 {
    if x < 0 {
        return 0.0;
    }
    let direct = lambda.powf(x as f64) * (-lambda).exp() / factorial_unchecked(x as u64);
    if direct.is_finite() {
        return direct;
    }
    (x as f64 * lambda.ln() - lambda - ln_factorial(x as u64)).exp()
}

/// P(X <= x) for X ~ Poisson(lambda)
///
/// Direct sum of the PMF over `0..=x`. Each term recomputes its
/// factorial, so the cost grows with `x`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn poisson_cdf(lambda: f64, x: i64) -> f64 {
    let mut s = 0.0;
    for k in 0..=x {
        s += poisson_pmf(lambda, k);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisson_pmf_at_zero() {
        assert!((poisson_pmf(3.0, 0) - (-3.0_f64).exp()).abs() < 1e-15);
        assert!((poisson_pmf(3.0, 0) - 0.049_787_1).abs() < 1e-7);
    }

    #[test]
    fn test_poisson_pmf_value() {
        // 3^2 e^-3 / 2
        let expected = 4.5 * (-3.0_f64).exp();
        assert!((poisson_pmf(3.0, 2) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_poisson_pmf_negative_x() {
        assert_eq!(poisson_pmf(3.0, -1), 0.0);
    }

    #[test]
    fn test_poisson_cdf_small() {
        let expected = (-2.0_f64).exp() * (1.0 + 2.0 + 2.0);
        assert!((poisson_cdf(2.0, 2) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_poisson_cdf_negative_x() {
        assert_eq!(poisson_cdf(2.0, -3), 0.0);
    }

    #[test]
    fn test_poisson_cdf_tends_to_one() {
        assert!((poisson_cdf(3.0, 60) - 1.0).abs() < 1e-12);
        assert!((poisson_cdf(0.5, 40) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_poisson_pmf_past_overflow() {
        // 100^155 overflows f64; ln form gives ~8e-8
        let v = poisson_pmf(100.0, 155);
        assert!(v.is_finite() && v > 0.0 && v < 1e-6);
        // continuous across the switch: ratio of successive terms is lambda / x
        let ratio = poisson_pmf(100.0, 155) / poisson_pmf(100.0, 154);
        assert!((ratio - 100.0 / 155.0).abs() < 1e-9);
        assert!(poisson_pmf(100.0, 1000) >= 0.0);
    }

    #[test]
    fn test_poisson_cdf_large_lambda() {
        assert!((poisson_cdf(100.0, 400) - 1.0).abs() < 1e-9);
        let at_200 = poisson_cdf(100.0, 200);
        assert!(at_200.is_finite() && at_200 <= 1.0 + 1e-12);
        // median sits at lambda
        let at_mean = poisson_cdf(100.0, 100);
        assert!(at_mean > 0.5 && at_mean < 0.56);
    }
}
