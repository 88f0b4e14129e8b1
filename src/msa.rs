//! Measurement-system analysis.
//!
//! Combines equipment variation (repeatability) and appraiser variation
//! (reproducibility), both expressed as a percentage of tolerance or total
//! variation, into a gauge R&R figure and grades it with the AIAG bands.
//!
//! # References
//!
//! AIAG (2010). *Measurement Systems Analysis*, 4th ed.

use std::fmt;

use crate::error::{Result, SpcError};

/// %GRR below which a measurement system is acceptable without reservation.
pub const EXCELLENT_LIMIT: f64 = 10.0;

/// %GRR up to which a measurement system is conditionally acceptable.
pub const MARGINAL_LIMIT: f64 = 30.0;

/// Combined gauge repeatability and reproducibility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaugeRr {
    /// `sqrt(ev² + av²)`, in percent.
    pub total_percent: f64,
    /// Acceptability band of `total_percent`.
    pub grade: GaugeGrade,
}

/// Acceptability of a measurement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GaugeGrade {
    /// Below 10 %.
    Excellent,
    /// From 10 % to 30 % inclusive.
    Marginal,
    /// Above 30 %.
    Unacceptable,
}

impl GaugeGrade {
    /// Grades a %GRR value.
    pub fn from_percent(total_percent: f64) -> Self {
        if total_percent < EXCELLENT_LIMIT {
            Self::Excellent
        } else if total_percent <= MARGINAL_LIMIT {
            Self::Marginal
        } else {
            Self::Unacceptable
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "highly reliable measurement system",
            Self::Marginal => "needs attention and possible improvement",
            Self::Unacceptable => "not acceptable, requires redesign",
        }
    }
}

impl fmt::Display for GaugeGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combines equipment and operator variation into a gauge R&R figure.
///
/// # Errors
///
/// `ParameterOutOfRange` if either input is negative or not finite.
///
/// # Examples
///
/// ```
/// use u_spc::msa::{gauge_rr, GaugeGrade};
///
/// let grr = gauge_rr(6.0, 8.0).unwrap();
/// assert!((grr.total_percent - 10.0).abs() < 1e-12);
/// assert_eq!(grr.grade, GaugeGrade::Marginal);
/// ```
pub fn gauge_rr(equipment: f64, operator: f64) -> Result<GaugeRr> {
    if !equipment.is_finite() || equipment < 0.0 {
        return Err(SpcError::out_of_range(
            "equipment",
            equipment,
            "a finite percentage >= 0",
        ));
    }
    if !operator.is_finite() || operator < 0.0 {
        return Err(SpcError::out_of_range(
            "operator",
            operator,
            "a finite percentage >= 0",
        ));
    }
    let total_percent = equipment.hypot(operator);
    Ok(GaugeRr {
        total_percent,
        grade: GaugeGrade::from_percent(total_percent),
    })
}
