//! Exponential distribution, X ~ Exp(lambda) with rate `lambda > 0`

use crate::error::{validation, DistResult};

/// Density at `x`
///
/// Fails for `lambda <= 0`; 0 for `x < 0`; otherwise `lambda * e^(-lambda x)`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn exp_pdf(lambda: f64, x: f64) -> DistResult<f64> {
    validation::require_positive("lambda", lambda)?;
    if x < 0.0 {
        return Ok(0.0);
    }
    Ok(lambda * (-lambda * x).exp())
}

/// P(X <= x)
///
/// Fails for `lambda <= 0`; 0 for `x < 0`; otherwise `1 - e^(-lambda x)`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn exp_cdf(lambda: f64, x: f64) -> DistResult<f64> {
    validation::require_positive("lambda", lambda)?;
    if x < 0.0 {
        return Ok(0.0);
    }
    Ok(1.0 - (-lambda * x).exp())
}

/// P(a <= X <= b)
///
/// The interval is checked before the rate, so a reversed interval is
/// reported even when `lambda` is also invalid.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn exp_between(lambda: f64, a: f64, b: f64) -> DistResult<f64> {
    validation::require_ordered(a, b)?;
    Ok(exp_cdf(lambda, b)? - exp_cdf(lambda, a)?)
}
