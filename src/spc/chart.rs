//! Shewhart control limits and the individuals chart summary.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use super::status::{process_status, ProcessStatus};
use crate::error::Result;
use crate::stats;

/// Width of Shewhart and EWMA control limits in standard deviations.
pub const SIGMA_MULTIPLIER: f64 = 3.0;

/// Upper and lower control limits.
///
/// # Invariants
///
/// - `lcl <= ucl` whenever the standard deviation is non-negative
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlLimits {
    /// Upper control limit (mean + 3 sigma).
    pub ucl: f64,
    /// Lower control limit (mean - 3 sigma).
    pub lcl: f64,
}

impl ControlLimits {
    /// Whether `value` lies strictly outside the limits.
    pub fn is_beyond(&self, value: f64) -> bool {
        value > self.ucl || value < self.lcl
    }
}

/// Classical 3-sigma limits around `mean`.
///
/// No validation is performed beyond what the arithmetic does: an invalid
/// `std_dev` propagates into the limits.
///
/// # Examples
///
/// ```
/// use u_spc::spc::control_limits;
///
/// let limits = control_limits(25.0, 2.0);
/// assert_eq!(limits.ucl, 31.0);
/// assert_eq!(limits.lcl, 19.0);
/// ```
pub fn control_limits(mean: f64, std_dev: f64) -> ControlLimits {
    ControlLimits {
        ucl: mean + SIGMA_MULTIPLIER * std_dev,
        lcl: mean - SIGMA_MULTIPLIER * std_dev,
    }
}

/// Individuals chart for a raw series of measurements.
///
/// Uses the overall sample standard deviation of the series (not the
/// moving-range estimate) for the 3-sigma limits.
///
/// # Examples
///
/// ```
/// use u_spc::spc::{IndividualsChart, ProcessStatus};
///
/// let chart = IndividualsChart::from_series(&[10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
/// assert!((chart.mean - 11.6).abs() < 1e-12);
/// assert!(chart.out_of_limits.is_empty());
/// assert_eq!(chart.status, ProcessStatus::Stable);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualsChart {
    /// Sample mean (center line).
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// 3-sigma control limits.
    pub limits: ControlLimits,
    /// Indices of observations strictly beyond the limits.
    pub out_of_limits: Vec<usize>,
    /// Status derived from the share of out-of-limit points.
    pub status: ProcessStatus,
}

impl IndividualsChart {
    /// Builds the chart from at least two finite observations.
    ///
    /// # Errors
    ///
    /// `EmptyInput`, `InsufficientData` or `NonFinite` for invalid data.
    pub fn from_series(data: &[f64]) -> Result<Self> {
        let mean = stats::mean(data)?;
        let std_dev = stats::sample_std_dev(data)?;
        let limits = control_limits(mean, std_dev);

        let out_of_limits: Vec<usize> = data
            .iter()
            .enumerate()
            .filter(|&(_, &x)| limits.is_beyond(x))
            .map(|(i, _)| i)
            .collect();
        let status = process_status(out_of_limits.len(), data.len());

        Ok(Self {
            mean,
            std_dev,
            limits,
            out_of_limits,
            status,
        })
    }
}
