//! Negative binomial distribution
//!
//! X counts failures before the r-th success in Bernoulli(p) trials:
//! `P(X = x) = C(x+r-1, x) * (1-p)^x * p^r` for `x = 0, 1, 2, ...`

use crate::combinatorics::{ln_factorial, n_cr};

/// P(X = x) for X ~ NegBin(r, p)
///
/// Returns 0, not an error, when `r <= 0`, `p` is outside `(0, 1)`, or
/// `x < 0`. Once the binomial coefficient overflows (large `r` and `x`)
/// the term is computed in log space instead.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn negbin_pmf(r: i64, p: f64, x: i64) -> f64 {
    if r <= 0 || p <= 0.0 || p >= 1.0 || x < 0 {
        return 0.0;
    }
    let direct = n_cr(x.saturating_add(r - 1), x) * (1.0 - p).powf(x as f64) * p.powf(r as f64);
    if direct.is_finite() {
        return direct;
    }
    let (r, x) = (r as u64, x as u64);
    let ln_coeff = ln_factorial(x + r - 1) - ln_factorial(r - 1) - ln_factorial(x);
    (ln_coeff + x as f64 * (1.0 - p).ln() + r as f64 * p.ln()).exp()
}

/// P(X <= x) for X ~ NegBin(r, p), summing the PMF over `0..=x`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn negbin_cdf(r: i64, p: f64, x: i64) -> f64 {
    let mut s = 0.0;
    for k in 0..=x {
        s += negbin_pmf(r, p, k);
    }
    s
}
