//! Serializable calculation requests
//!
//! A [`Query`] names one of the crate's functions together with its
//! arguments, so a front end can send a calculation as JSON (or, with the
//! `uniffi` feature, through [`query_from_json`] and [`evaluate_query`])
//! and get back a single number. Count fields (`n`, `r`, `x`) also accept
//! whole-number floats such as `2.0`, since loosely typed callers often
//! produce those:
//!
//! ```
//! use implore_dist::Query;
//!
//! let q = Query::from_json(r#"{"kind": "poisson_cdf", "lambda": 2.0, "x": 2}"#).unwrap();
//! let p = q.evaluate().unwrap();
//! assert!((p - 5.0 * (-2.0_f64).exp()).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::binomial::binomial_pmf;
use crate::combinatorics::{factorial, n_cr};
use crate::error::{DistError, DistResult};
use crate::exponential::{exp_between, exp_cdf, exp_pdf};
use crate::neg_binomial::{negbin_cdf, negbin_pmf};
use crate::normal::{normal_between, normal_cdf};
use crate::poisson::{poisson_cdf, poisson_pmf};

/// One calculation and its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    Factorial {
        #[serde(deserialize_with = "count::deserialize")]
        n: i64,
    },
    NCr {
        #[serde(deserialize_with = "count::deserialize")]
        n: i64,
        #[serde(deserialize_with = "count::deserialize")]
        r: i64,
    },
    BinomialPmf {
        #[serde(deserialize_with = "count::deserialize")]
        n: i64,
        p: f64,
        #[serde(deserialize_with = "count::deserialize")]
        x: i64,
    },
    PoissonPmf {
        lambda: f64,
        #[serde(deserialize_with = "count::deserialize")]
        x: i64,
    },
    PoissonCdf {
        lambda: f64,
        #[serde(deserialize_with = "count::deserialize")]
        x: i64,
    },
    ExpPdf { lambda: f64, x: f64 },
    ExpCdf { lambda: f64, x: f64 },
    ExpBetween { lambda: f64, a: f64, b: f64 },
    NormalCdf { z: f64 },
    NormalBetween { mu: f64, sigma: f64, a: f64, b: f64 },
    NegbinPmf {
        #[serde(deserialize_with = "count::deserialize")]
        r: i64,
        p: f64,
        #[serde(deserialize_with = "count::deserialize")]
        x: i64,
    },
    NegbinCdf {
        #[serde(deserialize_with = "count::deserialize")]
        r: i64,
        p: f64,
        #[serde(deserialize_with = "count::deserialize")]
        x: i64,
    },
}

/// Counts arrive as JSON integers or as whole-number floats
mod count {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i64),
        Float(f64),
    }

    // i64::MAX rounds up to 2^63 as f64, so the bound is exclusive
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Int(n) => Ok(n),
            Repr::Float(f) if f.fract() == 0.0 && f.abs() < LIMIT => Ok(f as i64),
            Repr::Float(f) => Err(D::Error::custom(format!(
                "expected a whole-number count, got {}",
                f
            ))),
        }
    }
}

/// Parse a query from JSON
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn query_from_json(json: &str) -> DistResult<Query> {
    Query::from_json(json)
}

/// Run a query, returning exactly what the direct call returns
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn evaluate_query(query: Query) -> DistResult<f64> {
    query.evaluate()
}

impl Query {
    /// Parse a query from its JSON form
    pub fn from_json(json: &str) -> DistResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::debug!(error = %e, "rejected malformed query");
            DistError::InvalidInput(format!("malformed query: {}", e))
        })
    }

    /// Serialize the query to JSON
    pub fn to_json(&self) -> DistResult<String> {
        serde_json::to_string(self).map_err(|e| DistError::InvalidInput(e.to_string()))
    }

    /// Name of the function this query calls
    pub fn name(&self) -> &'static str {
        match self {
            Query::Factorial { .. } => "factorial",
            Query::NCr { .. } => "nCr",
            Query::BinomialPmf { .. } => "binomialPMF",
            Query::PoissonPmf { .. } => "poissonPMF",
            Query::PoissonCdf { .. } => "poissonCDF",
            Query::ExpPdf { .. } => "expPDF",
            Query::ExpCdf { .. } => "expCDF",
            Query::ExpBetween { .. } => "expBetween",
            Query::NormalCdf { .. } => "normalCDF",
            Query::NormalBetween { .. } => "normalBetween",
            Query::NegbinPmf { .. } => "negbinPMF",
            Query::NegbinCdf { .. } => "negbinCDF",
        }
    }

    /// Run the calculation
    ///
    /// Returns exactly what the direct call returns, error included.
    pub fn evaluate(&self) -> DistResult<f64> {
        tracing::trace!(query = self.name(), "evaluating");
        match *self {
            Query::Factorial { n } => factorial(n),
            Query::NCr { n, r } => Ok(n_cr(n, r)),
            Query::BinomialPmf { n, p, x } => Ok(binomial_pmf(n, p, x)),
            Query::PoissonPmf { lambda, x } => Ok(poisson_pmf(lambda, x)),
            Query::PoissonCdf { lambda, x } => Ok(poisson_cdf(lambda, x)),
            Query::ExpPdf { lambda, x } => exp_pdf(lambda, x),
            Query::ExpCdf { lambda, x } => exp_cdf(lambda, x),
            Query::ExpBetween { lambda, a, b } => exp_between(lambda, a, b),
            Query::NormalCdf { z } => Ok(normal_cdf(z)),
            Query::NormalBetween { mu, sigma, a, b } => normal_between(mu, sigma, a, b),
            Query::NegbinPmf { r, p, x } => Ok(negbin_pmf(r, p, x)),
            Query::NegbinCdf { r, p, x } => Ok(negbin_cdf(r, p, x)),
        }
    }
}
