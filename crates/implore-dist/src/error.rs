//! Error types for implore-dist
//!
//! Only explicit precondition guards produce errors. Out-of-domain counts
//! (negative `x` for a PMF, `r > n` for `n_cr`, bad negative-binomial
//! parameters) are not errors: those functions return 0.

use thiserror::Error;

/// Error raised when a guarded precondition is violated
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum DistError {
    /// Negative input to `factorial`
    #[error("Invalid argument: n must be >= 0, got {n}")]
    InvalidArgument { n: i64 },

    /// Value could not be coerced to a number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Distribution parameter outside its domain (rate or scale <= 0)
    #[error("Invalid parameter: {name} must be > 0, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Interval bounds out of order
    #[error("Invalid range: a must be <= b, got a={a} b={b}")]
    InvalidRange { a: f64, b: f64 },
}

/// Result type alias for distribution operations
pub type DistResult<T> = Result<T, DistError>;

/// Guard helpers shared by the distribution modules
pub(crate) mod validation {
    use super::*;

    /// Require a strictly positive parameter (`lambda`, `sigma`).
    ///
    /// NaN passes the guard, matching the plain `value <= 0` comparison.
    pub fn require_positive(name: &'static str, value: f64) -> DistResult<()> {
        if value <= 0.0 {
            tracing::debug!(parameter = name, value, "rejected non-positive parameter");
            return Err(DistError::InvalidParameter { name, value });
        }
        Ok(())
    }

    /// Require `a <= b` for an interval query
    pub fn require_ordered(a: f64, b: f64) -> DistResult<()> {
        if a > b {
            tracing::debug!(a, b, "rejected reversed interval");
            return Err(DistError::InvalidRange { a, b });
        }
        Ok(())
    }
}
