//! Binomial distribution PMF

use crate::combinatorics::n_cr;

/// P(X = x) for X ~ Binomial(n, p)
///
/// `C(n, x) * p^x * (1-p)^(n-x)`. Neither `p` nor `x` is validated; an
/// `x` outside `0..=n` gives 0 through [`n_cr`].
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn binomial_pmf(n: i64, p: f64, x: i64) -> f64 {
    n_cr(n, x) * p.powf(x as f64) * (1.0 - p).powf(n as f64 - x as f64)
}
