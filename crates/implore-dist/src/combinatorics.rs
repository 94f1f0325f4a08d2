//! Combinatorial helpers: factorial and binomial coefficients
//!
//! Both work in `f64`, so they overflow to infinity instead of wrapping
//! (`factorial(171)` is already `inf`) and lose integer exactness once
//! intermediate products pass 2^53.

use statrs::function::gamma::ln_gamma;

use crate::error::{DistError, DistResult};

/// n! for `n >= 0`
///
/// Computed by iterative multiplication. Fails with
/// [`DistError::InvalidArgument`] for negative `n`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn factorial(n: i64) -> DistResult<f64> {
    if n < 0 {
        tracing::debug!(n, "rejected negative factorial argument");
        return Err(DistError::InvalidArgument { n });
    }
    Ok(factorial_unchecked(n as u64))
}

/// n! without the sign check, for callers that already guarantee `n >= 0`
pub(crate) fn factorial_unchecked(n: u64) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= k as f64;
        // inf * k stays inf
        if acc.is_infinite() {
            break;
        }
    }
    acc
}

/// ln(n!) via log-gamma, finite far beyond where `n!` overflows
#[inline]
pub(crate) fn ln_factorial(n: u64) -> f64 {
    ln_gamma(n as f64 + 1.0)
}

/// Binomial coefficient C(n, r)
///
/// Returns 0 rather than failing when `r < 0` or `r > n`. Uses the
/// smaller of `r` and `n - r` and accumulates numerator and denominator
/// separately, dividing once at the end. The result is a float: for large
/// `n` it is close to, but not guaranteed to equal, the exact integer.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn n_cr(n: i64, r: i64) -> f64 {
    if r < 0 || r > n {
        return 0.0;
    }
    let r = r.min(n - r);

    let mut num = 1.0_f64;
    let mut den = 1.0_f64;
    for k in 1..=r {
        num *= (n - r + k) as f64;
        den *= k as f64;
    }
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0), Ok(1.0));
        assert_eq!(factorial(1), Ok(1.0));
    }

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(5), Ok(120.0));
        assert_eq!(factorial(10), Ok(3_628_800.0));
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000.0));
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(factorial(-1), Err(DistError::InvalidArgument { n: -1 }));
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert!(factorial(170).unwrap().is_finite());
        assert_eq!(factorial(171), Ok(f64::INFINITY));
    }

    #[test]
    fn test_n_cr_values() {
        assert_eq!(n_cr(5, 2), 10.0);
        assert_eq!(n_cr(5, 0), 1.0);
        assert_eq!(n_cr(5, 5), 1.0);
        assert_eq!(n_cr(10, 3), 120.0);
        assert_eq!(n_cr(0, 0), 1.0);
    }

    #[test]
    fn test_n_cr_out_of_range_is_zero() {
        assert_eq!(n_cr(5, 6), 0.0);
        assert_eq!(n_cr(5, -1), 0.0);
        assert_eq!(n_cr(-2, 1), 0.0);
    }

    #[test]
    fn test_n_cr_symmetry() {
        for n in 0..30 {
            for r in 0..=n {
                assert_eq!(n_cr(n, r), n_cr(n, n - r), "n={} r={}", n, r);
            }
        }
    }

    #[test]
    fn test_ln_factorial_matches_factorial() {
        for n in [0u64, 1, 5, 20, 100, 170] {
            let direct = factorial_unchecked(n).ln();
            assert!((ln_factorial(n) - direct).abs() < 1e-9 * direct.max(1.0), "n={}", n);
        }
        assert!(ln_factorial(1000).is_finite());
    }

    #[test]
    fn test_n_cr_large_n_is_approximate() {
        // C(100, 50) ~ 1.0089e29, beyond exact f64 integers
        let c = n_cr(100, 50);
        assert!((c / 1.008_913_445_455_641_9e29 - 1.0).abs() < 1e-12);
    }
}
