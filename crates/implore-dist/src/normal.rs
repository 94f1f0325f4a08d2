//! Normal distribution
//!
//! Φ(z) uses the Zelen & Severo polynomial approximation (Abramowitz &
//! Stegun 26.2.17), accurate to about 1e-7 in absolute terms.

use std::f64::consts::PI;

use crate::error::{validation, DistResult};

const P: f64 = 0.231_641_9;
const B1: f64 = 0.319_381_530;
const B2: f64 = -0.356_563_782;
const B3: f64 = 1.781_477_937;
const B4: f64 = -1.821_255_978;
const B5: f64 = 1.330_274_429;

/// Standard normal CDF Φ(z)
///
/// The upper tail is approximated for `|z|` and reflected for negative
/// `z`, so `normal_cdf(-z) == 1.0 - normal_cdf(z)` holds exactly for `z > 0`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normal_cdf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + P * z.abs());
    let d = (-0.5 * z * z).exp() / (2.0 * PI).sqrt();
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let p = 1.0 - d * poly;
    if z >= 0.0 {
        p
    } else {
        1.0 - p
    }
}

/// P(a <= X <= b) for X ~ Normal(mu, sigma)
///
/// Fails for `sigma <= 0`. Bounds are not required to be ordered; a
/// reversed interval yields a negative result.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normal_between(mu: f64, sigma: f64, a: f64, b: f64) -> DistResult<f64> {
    validation::require_positive("sigma", sigma)?;
    let za = (a - mu) / sigma;
    let zb = (b - mu) / sigma;
    Ok(normal_cdf(zb) - normal_cdf(za))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DistError;

    #[test]
    fn test_normal_cdf_at_zero() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_normal_cdf_table_values() {
        // Standard normal table
        let table = [
            (0.5, 0.691_462_461_274_013_1),
            (1.0, 0.841_344_746_068_542_9),
            (1.96, 0.975_002_104_851_780_1),
            (2.5, 0.993_790_334_674_223_8),
            (-1.0, 0.158_655_253_931_457_05),
        ];
        for (z, expected) in table {
            assert!(
                (normal_cdf(z) - expected).abs() < 1e-7,
                "Φ({}) = {}, expected {}",
                z,
                normal_cdf(z),
                expected
            );
        }
    }

    #[test]
    fn test_normal_cdf_symmetry() {
        for z in [0.1, 0.7, 1.3, 2.2, 4.0] {
            assert_eq!(normal_cdf(-z), 1.0 - normal_cdf(z));
        }
    }

    #[test]
    fn test_normal_cdf_tails() {
        assert!(normal_cdf(10.0) > 1.0 - 1e-12);
        assert!(normal_cdf(-10.0) < 1e-12);
    }

    #[test]
    fn test_normal_between_95() {
        let v = normal_between(0.0, 1.0, -1.96, 1.96).unwrap();
        assert!((v - 0.95).abs() < 1e-3);
    }

    #[test]
    fn test_normal_between_scaled() {
        // Same interval in standardized units
        let standard = normal_between(0.0, 1.0, -1.0, 2.0).unwrap();
        let scaled = normal_between(100.0, 15.0, 85.0, 130.0).unwrap();
        assert!((standard - scaled).abs() < 1e-12);
    }

    #[test]
    fn test_normal_between_invalid_sigma() {
        assert_eq!(
            normal_between(0.0, 0.0, 0.0, 1.0),
            Err(DistError::InvalidParameter {
                name: "sigma",
                value: 0.0
            })
        );
        assert!(normal_between(0.0, -2.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_normal_between_reversed_is_negative() {
        let v = normal_between(0.0, 1.0, 1.0, -1.0).unwrap();
        assert!(v < 0.0);
    }
}
