//! Defect-rate to sigma-level conversion.
//!
//! # Closed-form approximation
//!
//! The converter uses an empirical closed form for the short-term sigma
//! level of a defect rate expressed in DPMO:
//!
//! ```text
//! sigma = 0.8406 + sqrt(29.37 - 2.221 * ln(DPMO))
//! ```
//!
//! It is defined only while `DPMO > 0` and the radicand is non-negative
//! (roughly `DPMO <= 550,000`).
//!
//! # Exact conversion
//!
//! [`sigma_to_ppm`] and [`ppm_to_sigma`] use the inverse normal CDF with the
//! Motorola 1.5-sigma long-term shift:
//!
//! | Sigma | PPM (defects per million) |
//! |-------|--------------------------|
//! | 6.0   | 3.4                      |
//! | 5.0   | 233                      |
//! | 4.0   | 6,210                    |
//! | 3.0   | 66,807                   |
//! | 2.0   | 308,538                  |
//!
//! # References
//!
//! - Harry & Schroeder (2000), *Six Sigma: The Breakthrough Management
//!   Strategy Revolutionizing the World's Top Corporations*.
//! - Motorola University, "The Six Sigma Process" (defining the 1.5-sigma
//!   shift convention).

use std::fmt;

use crate::error::{Result, SpcError};
use u_numflow::special::{inverse_normal_cdf, standard_normal_cdf};

const SIGMA_OFFSET: f64 = 0.8406;
const SIGMA_INTERCEPT: f64 = 29.37;
const SIGMA_SLOPE: f64 = 2.221;
const MILLION: f64 = 1_000_000.0;

/// DPMO, sigma level and yield of a process.
///
/// # Examples
///
/// ```
/// use u_spc::capability::{SixSigmaMetrics, SigmaGrade};
///
/// let m = SixSigmaMetrics::compute(3, 1000, 5).unwrap();
/// assert!((m.dpmo - 600.0).abs() < 1e-9);
/// assert!((m.process_yield - 99.94).abs() < 1e-9);
/// assert!((m.sigma_level - 4.73).abs() < 0.01);
/// assert_eq!(m.grade(), SigmaGrade::Competitive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SixSigmaMetrics {
    /// Defects per million opportunities.
    pub dpmo: f64,
    /// Sigma level from the closed-form approximation.
    pub sigma_level: f64,
    /// Defect-free share of opportunities, in percent.
    pub process_yield: f64,
}

impl SixSigmaMetrics {
    /// Computes all three metrics from raw defect counts.
    ///
    /// # Errors
    ///
    /// - `ParameterOutOfRange` if `units` or `opportunities_per_unit` is 0.
    /// - `Domain` if there are no defects or too many for the sigma-level
    ///   approximation.
    pub fn compute(defects: u64, units: u64, opportunities_per_unit: u64) -> Result<Self> {
        let dpmo = dpmo(defects, units, opportunities_per_unit)?;
        let sigma_level = sigma_level(dpmo)?;
        Ok(Self {
            dpmo,
            sigma_level,
            process_yield: process_yield(dpmo),
        })
    }

    /// Interpretation of the sigma level.
    pub fn grade(&self) -> SigmaGrade {
        interpret_sigma(self.sigma_level)
    }
}

/// Defects per million opportunities.
///
/// ```text
/// DPMO = defects / (units * opportunities_per_unit) * 1,000,000
/// ```
///
/// # Errors
///
/// `ParameterOutOfRange` if `units` or `opportunities_per_unit` is 0.
pub fn dpmo(defects: u64, units: u64, opportunities_per_unit: u64) -> Result<f64> {
    if units == 0 {
        return Err(SpcError::out_of_range("units", 0.0, "at least 1"));
    }
    if opportunities_per_unit == 0 {
        return Err(SpcError::out_of_range(
            "opportunities_per_unit",
            0.0,
            "at least 1",
        ));
    }
    let opportunities = units as f64 * opportunities_per_unit as f64;
    Ok(defects as f64 / opportunities * MILLION)
}

/// Sigma level from DPMO using the closed-form approximation.
///
/// # Errors
///
/// `Domain` if `dpmo` is not a positive finite number (the logarithm is
/// undefined) or if `29.37 - 2.221 * ln(dpmo)` is negative.
///
/// # Examples
///
/// ```
/// use u_spc::capability::sigma_level;
///
/// let s = sigma_level(3.4).unwrap();
/// assert!(s > 6.0);
/// assert!(sigma_level(0.0).is_err());
/// assert!(sigma_level(900_000.0).is_err());
/// ```
pub fn sigma_level(dpmo: f64) -> Result<f64> {
    if dpmo.is_nan() || dpmo <= 0.0 || dpmo.is_infinite() {
        return Err(SpcError::Domain {
            dpmo,
            reason: "DPMO must be a positive finite number",
        });
    }
    let radicand = SIGMA_INTERCEPT - SIGMA_SLOPE * dpmo.ln();
    if radicand < 0.0 {
        return Err(SpcError::Domain {
            dpmo,
            reason: "defect rate is too high for the approximation",
        });
    }
    Ok(SIGMA_OFFSET + radicand.sqrt())
}

/// Process yield in percent: `(1 - DPMO / 1,000,000) * 100`.
pub fn process_yield(dpmo: f64) -> f64 {
    (1.0 - dpmo / MILLION) * 100.0
}

/// Qualitative sigma-level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SigmaGrade {
    /// Sigma >= 6.
    WorldClass,
    /// 5 <= sigma < 6.
    HighQuality,
    /// 4 <= sigma < 5.
    Competitive,
    /// 3 <= sigma < 4.
    MinimumAcceptable,
    /// Sigma < 3.
    HighVariability,
}

impl SigmaGrade {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WorldClass => "world-class, virtually zero defects",
            Self::HighQuality => "high quality, very few defects",
            Self::Competitive => "controlled and competitive",
            Self::MinimumAcceptable => "minimum acceptable level",
            Self::HighVariability => "high variability, needs significant improvement",
        }
    }
}

impl fmt::Display for SigmaGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a sigma level. Each band includes its lower bound.
pub fn interpret_sigma(level: f64) -> SigmaGrade {
    if level >= 6.0 {
        SigmaGrade::WorldClass
    } else if level >= 5.0 {
        SigmaGrade::HighQuality
    } else if level >= 4.0 {
        SigmaGrade::Competitive
    } else if level >= 3.0 {
        SigmaGrade::MinimumAcceptable
    } else {
        SigmaGrade::HighVariability
    }
}

/// Converts a sigma quality level to a PPM defect rate (1.5-sigma shift).
///
/// ```text
/// PPM = 1,000,000 * (1 - Phi(sigma - 1.5))
/// ```
///
/// # Examples
///
/// ```
/// use u_spc::capability::sigma_to_ppm;
///
/// assert!((sigma_to_ppm(6.0) - 3.4).abs() < 1.0);
/// assert!((sigma_to_ppm(3.0) - 66_807.0).abs() < 500.0);
/// ```
pub fn sigma_to_ppm(sigma: f64) -> f64 {
    MILLION * (1.0 - standard_normal_cdf(sigma - 1.5))
}

/// Converts a PPM defect rate to a sigma quality level (1.5-sigma shift).
///
/// ```text
/// sigma = Phi_inv(1 - PPM / 1,000,000) + 1.5
/// ```
///
/// # Returns
///
/// `None` if `ppm` is NaN or outside `(0, 1_000_000)`.
pub fn ppm_to_sigma(ppm: f64) -> Option<f64> {
    if ppm.is_nan() || ppm <= 0.0 || ppm >= MILLION {
        return None;
    }
    let z = inverse_normal_cdf(1.0 - ppm / MILLION);
    z.is_finite().then_some(z + 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    // -----------------------------------------------------------------------
    // DPMO and yield
    // -----------------------------------------------------------------------

    #[test]
    fn test_dpmo_known_value() {
        assert!((dpmo(3, 1000, 5).unwrap() - 600.0).abs() < 1e-9);
        assert!((dpmo(1, 1, 1).unwrap() - 1_000_000.0).abs() < 1e-9);
        assert_eq!(dpmo(0, 10, 10).unwrap(), 0.0);
    }

    #[test]
    fn test_dpmo_rejects_zero_opportunities() {
        assert_eq!(dpmo(1, 0, 5).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(dpmo(1, 5, 0).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_dpmo_does_not_overflow() {
        let d = dpmo(1, u64::MAX, u64::MAX).unwrap();
        assert!(d >= 0.0 && d.is_finite());
    }

    #[test]
    fn test_yield_known_values() {
        assert!((process_yield(600.0) - 99.94).abs() < 1e-9);
        assert!((process_yield(0.0) - 100.0).abs() < 1e-12);
        assert!(process_yield(1_000_000.0).abs() < 1e-12);
    }

    // -----------------------------------------------------------------------
    // Closed-form sigma level
    // -----------------------------------------------------------------------

    #[test]
    fn test_sigma_level_for_600_dpmo() {
        // 0.8406 + sqrt(29.37 - 2.221 * ln 600) = 0.8406 + sqrt(15.1624)
        let s = sigma_level(600.0).unwrap();
        assert!((s - 4.7345).abs() < 1e-3, "got {s}");
    }

    #[test]
    fn test_sigma_level_tracks_exact_conversion() {
        // The closed form stays within ~0.15 sigma of the exact conversion
        // across the usual range.
        for ppm in [3.4, 233.0, 6_210.0, 66_807.0] {
            let approx = sigma_level(ppm).unwrap();
            let exact = ppm_to_sigma(ppm).unwrap();
            assert!(
                (approx - exact).abs() < 0.15,
                "ppm={ppm}: approx {approx}, exact {exact}"
            );
        }
    }

    #[test]
    fn test_sigma_level_domain_errors() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = sigma_level(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DomainError, "dpmo = {bad}");
        }
        // ln(600_000) = 13.30 > 29.37 / 2.221 = 13.22
        assert_eq!(
            sigma_level(600_000.0).unwrap_err().kind(),
            ErrorKind::DomainError
        );
    }

    #[test]
    fn test_sigma_level_at_domain_edge() {
        let edge = (SIGMA_INTERCEPT / SIGMA_SLOPE).exp() * (1.0 - 1e-12);
        let s = sigma_level(edge).unwrap();
        assert!((s - SIGMA_OFFSET).abs() < 1e-3);
    }

    #[test]
    fn test_metrics_without_defects_fail() {
        let err = SixSigmaMetrics::compute(0, 1000, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    fn test_metrics_with_too_many_defects_fail() {
        let err = SixSigmaMetrics::compute(5000, 1000, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    // -----------------------------------------------------------------------
    // Interpretation
    // -----------------------------------------------------------------------

    #[test]
    fn test_sigma_bands_include_lower_bound() {
        assert_eq!(interpret_sigma(6.0), SigmaGrade::WorldClass);
        assert_eq!(interpret_sigma(5.99), SigmaGrade::HighQuality);
        assert_eq!(interpret_sigma(5.0), SigmaGrade::HighQuality);
        assert_eq!(interpret_sigma(4.0), SigmaGrade::Competitive);
        assert_eq!(interpret_sigma(3.0), SigmaGrade::MinimumAcceptable);
        assert_eq!(interpret_sigma(2.99), SigmaGrade::HighVariability);
    }

    #[test]
    fn test_sigma_labels() {
        assert_eq!(
            SigmaGrade::WorldClass.to_string(),
            "world-class, virtually zero defects"
        );
        assert_eq!(
            SigmaGrade::HighVariability.to_string(),
            "high variability, needs significant improvement"
        );
    }

    // -----------------------------------------------------------------------
    // Exact conversion
    // -----------------------------------------------------------------------

    #[test]
    fn test_sigma_to_ppm_known_values() {
        let cases: &[(f64, f64, f64)] = &[
            (6.0, 3.4, 1.0),
            (5.0, 233.0, 20.0),
            (4.0, 6_210.0, 200.0),
            (3.0, 66_807.0, 500.0),
            (2.0, 308_538.0, 3_000.0),
        ];
        for &(sigma, expected, tol) in cases {
            let ppm = sigma_to_ppm(sigma);
            assert!(
                (ppm - expected).abs() < tol,
                "sigma={sigma}: expected ~{expected}, got {ppm}"
            );
        }
    }

    #[test]
    fn test_roundtrip_sigma_ppm_sigma() {
        for &sigma in &[2.0, 3.0, 4.0, 5.0, 6.0] {
            let ppm = sigma_to_ppm(sigma);
            let recovered = ppm_to_sigma(ppm).expect("roundtrip should succeed");
            assert!(
                (recovered - sigma).abs() < 0.01,
                "sigma={sigma}, ppm={ppm}, recovered={recovered}"
            );
        }
    }

    #[test]
    fn test_ppm_to_sigma_rejects_out_of_range() {
        assert!(ppm_to_sigma(0.0).is_none());
        assert!(ppm_to_sigma(-1.0).is_none());
        assert!(ppm_to_sigma(1_000_000.0).is_none());
        assert!(ppm_to_sigma(f64::NAN).is_none());
    }
}
