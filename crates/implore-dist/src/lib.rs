//! implore-dist - Closed-form probability distributions
//!
//! Stateless PMF, PDF and CDF functions for the distributions a
//! statistics calculator needs, plus the combinatorial helpers they
//! build on:
//!
//! - **Combinatorics**: `factorial`, `n_cr`
//! - **Binomial**: `binomial_pmf`
//! - **Poisson**: `poisson_pmf`, `poisson_cdf`
//! - **Exponential**: `exp_pdf`, `exp_cdf`, `exp_between`
//! - **Normal**: `normal_cdf` (Zelen & Severo), `normal_between`
//! - **Negative binomial**: `negbin_pmf`, `negbin_cdf`
//!
//! # Errors versus zeros
//!
//! Functions with an explicit precondition (`factorial` of a negative
//! number, a non-positive exponential rate or normal sigma, a reversed
//! exponential interval, non-numeric input to `to_number`) return a
//! [`DistError`]. Out-of-domain counts are not errors: a PMF at a
//! negative count, `n_cr` with `r > n`, and negative-binomial parameters
//! outside their range all return 0.
//!
//! ```
//! use implore_dist::{exp_between, negbin_pmf, n_cr};
//!
//! assert_eq!(n_cr(5, 6), 0.0);
//! assert_eq!(negbin_pmf(0, 0.5, 1), 0.0);
//! assert!(exp_between(1.0, 2.0, 1.0).is_err());
//! ```

pub mod binomial;
pub mod coerce;
pub mod combinatorics;
pub mod error;
pub mod exponential;
pub mod neg_binomial;
pub mod normal;
pub mod poisson;
pub mod query;

pub use binomial::*;
pub use coerce::*;
pub use combinatorics::*;
pub use error::{DistError, DistResult};
pub use exponential::*;
pub use neg_binomial::*;
pub use normal::*;
pub use poisson::*;
pub use query::{evaluate_query, query_from_json, Query};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
