//! Process capability indices (Cp, Cpk) and their interpretation.
//!
//! Capability indices quantify how well the process spread fits inside the
//! specification limits. Cp ignores centering; Cpk penalizes a mean that
//! drifts toward either limit, so `Cpk <= Cp` with equality exactly when the
//! mean sits at the midpoint of the limits.
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 8.
//! - Kane (1986), "Process Capability Indices", *Journal of Quality Technology*
//!   18(1), pp. 41--52.

use std::fmt;

use crate::error::{Result, SpcError};
use crate::stats;

/// Index value at or above which a process is capable.
pub const CAPABLE_THRESHOLD: f64 = 1.33;

/// Index value at or above which a process is marginally capable.
pub const MARGINAL_THRESHOLD: f64 = 1.00;

/// `Cp - Cpk` below which a process is well centered.
pub const WELL_CENTERED_GAP: f64 = 0.10;

/// `Cp - Cpk` below which a process is only slightly off-center.
pub const SLIGHTLY_OFF_CENTER_GAP: f64 = 0.20;

/// Computed capability indices.
///
/// # Index interpretation
///
/// | Index | Value | Interpretation |
/// |-------|-------|----------------|
/// | Cp/Cpk | >= 1.33 | capable |
/// | Cp/Cpk | 1.00 .. 1.33 | marginally capable |
/// | Cp/Cpk | < 1.00 | not capable |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityIndices {
    /// Cp = (USL - LSL) / (6 * sigma).
    pub cp: f64,
    /// Cpk = min(Cpu, Cpl).
    pub cpk: f64,
    /// Cpu = (USL - mean) / (3 * sigma).
    pub cpu: f64,
    /// Cpl = (mean - LSL) / (3 * sigma).
    pub cpl: f64,
}

impl CapabilityIndices {
    /// Interpretation of the potential capability (Cp).
    pub fn grade(&self) -> CapabilityGrade {
        interpret_capability(self.cp)
    }

    /// Interpretation of the gap between Cp and Cpk.
    pub fn centering(&self) -> Centering {
        interpret_centering(self.cp, self.cpk)
    }
}

/// Computes Cp and Cpk from summary statistics.
///
/// The limits are not required to satisfy `usl > lsl`; reversed limits
/// simply produce negative indices.
///
/// # Errors
///
/// - `DivisionByZero` if `std_dev == 0`: capability is undefined for a
///   process without spread.
/// - `ParameterOutOfRange` if `std_dev` is negative or any argument is not
///   finite.
///
/// # Examples
///
/// ```
/// use u_spc::capability::process_capability;
///
/// // Centered process: Cp == Cpk
/// let idx = process_capability(220.0, 200.0, 210.0, 2.0).unwrap();
/// assert!((idx.cp - 1.6667).abs() < 1e-4);
/// assert!((idx.cpk - idx.cp).abs() < 1e-12);
///
/// // Zero spread is an error, never a Cp of zero
/// assert!(process_capability(12.0, 8.0, 10.0, 0.0).is_err());
/// ```
pub fn process_capability(usl: f64, lsl: f64, mean: f64, std_dev: f64) -> Result<CapabilityIndices> {
    for (name, value) in [("usl", usl), ("lsl", lsl), ("mean", mean)] {
        if !value.is_finite() {
            return Err(SpcError::out_of_range(name, value, "a finite number"));
        }
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(SpcError::out_of_range(
            "std_dev",
            std_dev,
            "a finite, non-negative number",
        ));
    }
    if std_dev == 0.0 {
        return Err(SpcError::DivisionByZero {
            quantity: "process capability",
        });
    }

    let cp = (usl - lsl) / (6.0 * std_dev);
    let cpu = (usl - mean) / (3.0 * std_dev);
    let cpl = (mean - lsl) / (3.0 * std_dev);

    Ok(CapabilityIndices {
        cp,
        cpk: cpu.min(cpl),
        cpu,
        cpl,
    })
}

/// Input specification for capability analysis of a raw series.
///
/// # Examples
///
/// ```
/// use u_spc::capability::ProcessCapability;
///
/// let spec = ProcessCapability::new(12.0, 8.0);
/// let idx = spec.compute(&[10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
/// assert!((idx.cp - 0.585).abs() < 1e-3);
/// assert!((idx.cpk - 0.117).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessCapability {
    usl: f64,
    lsl: f64,
}

impl ProcessCapability {
    /// Creates a two-sided specification.
    pub fn new(usl: f64, lsl: f64) -> Self {
        Self { usl, lsl }
    }

    /// Upper specification limit.
    pub fn usl(&self) -> f64 {
        self.usl
    }

    /// Lower specification limit.
    pub fn lsl(&self) -> f64 {
        self.lsl
    }

    /// Computes the indices from the sample mean and sample standard
    /// deviation of `data`.
    ///
    /// # Errors
    ///
    /// Invalid data (fewer than 2 points, non-finite values) and every
    /// failure of [`process_capability`].
    pub fn compute(&self, data: &[f64]) -> Result<CapabilityIndices> {
        let mean = stats::mean(data)?;
        let std_dev = stats::sample_std_dev(data)?;
        process_capability(self.usl, self.lsl, mean, std_dev)
    }
}

/// Qualitative capability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapabilityGrade {
    /// Index >= 1.33.
    Capable,
    /// 1.00 <= index < 1.33.
    MarginallyCapable,
    /// Index < 1.00.
    NotCapable,
}

impl CapabilityGrade {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Capable => "capable",
            Self::MarginallyCapable => "marginally capable",
            Self::NotCapable => "not capable",
        }
    }
}

impl fmt::Display for CapabilityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a capability index. Each band includes its lower bound.
///
/// # Examples
///
/// ```
/// use u_spc::capability::{interpret_capability, CapabilityGrade};
///
/// assert_eq!(interpret_capability(1.33), CapabilityGrade::Capable);
/// assert_eq!(interpret_capability(1.0), CapabilityGrade::MarginallyCapable);
/// assert_eq!(interpret_capability(0.58), CapabilityGrade::NotCapable);
/// ```
pub fn interpret_capability(value: f64) -> CapabilityGrade {
    if value >= CAPABLE_THRESHOLD {
        CapabilityGrade::Capable
    } else if value >= MARGINAL_THRESHOLD {
        CapabilityGrade::MarginallyCapable
    } else {
        CapabilityGrade::NotCapable
    }
}

/// How far the process mean sits from the middle of the specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Centering {
    /// Cp - Cpk < 0.10.
    WellCentered,
    /// 0.10 <= Cp - Cpk < 0.20.
    SlightlyOffCenter,
    /// Cp - Cpk >= 0.20.
    SignificantlyOffCenter,
}

impl Centering {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WellCentered => "well centered",
            Self::SlightlyOffCenter => "slightly off-center",
            Self::SignificantlyOffCenter => "significantly off-center",
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies centering from the gap `cp - cpk`.
pub fn interpret_centering(cp: f64, cpk: f64) -> Centering {
    let gap = cp - cpk;
    if gap < WELL_CENTERED_GAP {
        Centering::WellCentered
    } else if gap < SLIGHTLY_OFF_CENTER_GAP {
        Centering::SlightlyOffCenter
    } else {
        Centering::SignificantlyOffCenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    // -----------------------------------------------------------------------
    // Computation
    // -----------------------------------------------------------------------

    /// LSL = 200, USL = 220, mean = 215, sigma = 2.0
    /// Cp = 20 / 12 = 1.6667
    /// Cpu = 5 / 6 = 0.8333
    /// Cpl = 15 / 6 = 2.5
    #[test]
    fn test_off_center_process() {
        let idx = process_capability(220.0, 200.0, 215.0, 2.0).unwrap();
        assert!((idx.cp - 1.666_666_7).abs() < 1e-6, "cp = {}", idx.cp);
        assert!((idx.cpu - 0.833_333_3).abs() < 1e-6, "cpu = {}", idx.cpu);
        assert!((idx.cpl - 2.5).abs() < 1e-12, "cpl = {}", idx.cpl);
        assert_eq!(idx.cpk, idx.cpu, "Cpk should equal min(Cpu, Cpl)");
    }

    #[test]
    fn test_off_center_toward_lsl_uses_cpl() {
        let idx = process_capability(220.0, 200.0, 203.0, 2.0).unwrap();
        assert_eq!(idx.cpk, idx.cpl);
        assert!(idx.cpk < idx.cp);
    }

    #[test]
    fn test_centered_process_has_equal_indices() {
        let idx = process_capability(12.0, 8.0, 10.0, 0.5).unwrap();
        assert!((idx.cp - idx.cpk).abs() < 1e-12);
        assert_eq!(idx.centering(), Centering::WellCentered);
    }

    #[test]
    fn test_mean_outside_limits_gives_negative_cpk() {
        let idx = process_capability(12.0, 8.0, 13.0, 0.5).unwrap();
        assert!(idx.cpk < 0.0);
    }

    #[test]
    fn test_series_example() {
        let idx = ProcessCapability::new(12.0, 8.0)
            .compute(&[10.0, 12.0, 11.0, 13.0, 12.0])
            .unwrap();
        let sd = 1.3_f64.sqrt();
        assert!((idx.cp - 4.0 / (6.0 * sd)).abs() < 1e-12);
        assert!((idx.cpk - 0.4 / (3.0 * sd)).abs() < 1e-12);
        assert_eq!(idx.grade(), CapabilityGrade::NotCapable);
        assert_eq!(idx.centering(), Centering::SignificantlyOffCenter);
    }

    // -----------------------------------------------------------------------
    // Failure modes
    // -----------------------------------------------------------------------

    #[test]
    fn test_zero_sigma_is_division_by_zero() {
        let err = process_capability(12.0, 8.0, 10.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_constant_series_is_division_by_zero() {
        let err = ProcessCapability::new(12.0, 8.0)
            .compute(&[10.0; 8])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_negative_or_non_finite_sigma_is_invalid() {
        for sd in [-1.0, f64::NAN, f64::INFINITY] {
            let err = process_capability(12.0, 8.0, 10.0, sd).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "sd = {sd}");
        }
    }

    #[test]
    fn test_non_finite_limits_are_invalid() {
        assert!(process_capability(f64::NAN, 8.0, 10.0, 1.0).is_err());
        assert!(process_capability(12.0, f64::NEG_INFINITY, 10.0, 1.0).is_err());
        assert!(process_capability(12.0, 8.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_compute_rejects_short_series() {
        let spec = ProcessCapability::new(12.0, 8.0);
        assert!(spec.compute(&[10.0]).is_err());
        assert!(spec.compute(&[]).is_err());
    }

    // -----------------------------------------------------------------------
    // Interpretation bands
    // -----------------------------------------------------------------------

    #[test]
    fn test_capability_bands_include_lower_bound() {
        assert_eq!(interpret_capability(2.0), CapabilityGrade::Capable);
        assert_eq!(interpret_capability(1.33), CapabilityGrade::Capable);
        assert_eq!(interpret_capability(1.329), CapabilityGrade::MarginallyCapable);
        assert_eq!(interpret_capability(1.0), CapabilityGrade::MarginallyCapable);
        assert_eq!(interpret_capability(0.999), CapabilityGrade::NotCapable);
        assert_eq!(interpret_capability(-0.5), CapabilityGrade::NotCapable);
    }

    #[test]
    fn test_centering_bands() {
        assert_eq!(interpret_centering(1.5, 1.45), Centering::WellCentered);
        assert_eq!(interpret_centering(1.5, 1.35), Centering::SlightlyOffCenter);
        assert_eq!(interpret_centering(1.5, 1.25), Centering::SignificantlyOffCenter);
    }

    #[test]
    fn test_grade_labels() {
        assert_eq!(CapabilityGrade::Capable.to_string(), "capable");
        assert_eq!(
            CapabilityGrade::MarginallyCapable.to_string(),
            "marginally capable"
        );
        assert_eq!(CapabilityGrade::NotCapable.to_string(), "not capable");
        assert_eq!(Centering::WellCentered.to_string(), "well centered");
        assert_eq!(
            Centering::SignificantlyOffCenter.to_string(),
            "significantly off-center"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cpk_never_exceeds_cp(
            lsl in -1e3_f64..1e3,
            width in 0.1_f64..1e3,
            mean in -2e3_f64..2e3,
            sd in 1e-3_f64..1e2,
        ) {
            let idx = process_capability(lsl + width, lsl, mean, sd).unwrap();
            prop_assert!(idx.cpk <= idx.cp + 1e-9 * idx.cp.abs().max(1.0));
        }
    }
}
