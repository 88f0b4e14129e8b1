//! One-call capability study of a sample series.
//!
//! Bundles what a capability screen shows side by side: the individuals
//! chart, Cp/Cpk with their interpretations, and a histogram of the data.

use crate::capability::{CapabilityGrade, CapabilityIndices, Centering, ProcessCapability};
use crate::distribution::{histogram, Histogram, DEFAULT_BINS};
use crate::error::Result;
use crate::spc::IndividualsChart;

/// Capability study of a series against two-sided specification limits.
///
/// # Examples
///
/// ```
/// use u_spc::capability::{CapabilityGrade, Centering};
/// use u_spc::report::CapabilityStudy;
///
/// let study = CapabilityStudy::run(&[10.0, 12.0, 11.0, 13.0, 12.0], 12.0, 8.0).unwrap();
/// assert!((study.chart.mean - 11.6).abs() < 1e-12);
/// assert_eq!(study.grade, CapabilityGrade::NotCapable);
/// assert_eq!(study.centering, Centering::SignificantlyOffCenter);
/// assert_eq!(study.histogram.counts.iter().sum::<usize>(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityStudy {
    /// Mean, sample standard deviation, control limits and flagged points.
    pub chart: IndividualsChart,
    /// Cp, Cpk, CPU and CPL.
    pub indices: CapabilityIndices,
    /// Capability band of Cp.
    pub grade: CapabilityGrade,
    /// Centering band of Cp - Cpk.
    pub centering: Centering,
    /// Distribution of the observations over [`DEFAULT_BINS`] bins.
    pub histogram: Histogram,
}

impl CapabilityStudy {
    /// Runs the study.
    ///
    /// # Errors
    ///
    /// Any failure of [`IndividualsChart::from_series`] or
    /// [`process_capability`](crate::capability::process_capability),
    /// including `DivisionByZero` for a series without spread.
    pub fn run(data: &[f64], usl: f64, lsl: f64) -> Result<Self> {
        let chart = IndividualsChart::from_series(data)?;
        let indices = ProcessCapability::new(usl, lsl).compute(data)?;
        let histogram = histogram(data, DEFAULT_BINS)?;
        Ok(Self {
            grade: indices.grade(),
            centering: indices.centering(),
            chart,
            indices,
            histogram,
        })
    }
}
