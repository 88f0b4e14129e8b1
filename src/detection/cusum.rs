//! Cumulative Sum (CUSUM) chart for detecting small persistent shifts in process mean.
//!
//! # Algorithm
//!
//! Two one-sided accumulators run over the observations, both seeded at 0:
//!
//! ```text
//! C+(i) = max(0, x_i - (target + k) + C+(i-1))
//! C-(i) = max(0, (target - k) - x_i + C-(i-1))
//! ```
//!
//! The decision interval is derived from the spread of the series about the
//! target rather than about its own mean:
//!
//! ```text
//! h = 4 * sqrt(sum((x_i - target)^2) / n)
//! ```
//!
//! A point signals above target when `C+(i) > h` and below target when
//! `C-(i) > h`.
//!
//! # Parameters
//!
//! - **target**: the process mean the chart guards
//! - **k**: reference value (slack), in measurement units
//!
//! # Reference
//!
//! Page, E.S. (1954). "Continuous inspection schemes", *Biometrika* 41(1-2), pp. 100-115.

use crate::error::{Result, SpcError};
use crate::spc::{process_status, ProcessStatus};
use crate::stats;

/// Multiplier applied to the deviation about target to obtain `h`.
pub const DECISION_INTERVAL_MULTIPLIER: f64 = 4.0;

/// CUSUM chart parameters.
///
/// Implements the tabular (two-sided) CUSUM procedure for detecting
/// both upward and downward shifts in a process mean.
///
/// # Examples
///
/// ```
/// use u_spc::detection::Cusum;
///
/// let cusum = Cusum::new(100.0, 0.5).unwrap();
/// let result = cusum.analyze(&[98.0, 102.0, 97.0, 101.0, 99.0]).unwrap();
/// assert_eq!(result.positive[0], 0.0);
/// assert!((result.negative[0] - 1.5).abs() < 1e-12);
/// assert!(result.signal_points().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cusum {
    /// Target process mean.
    target: f64,
    /// Reference value (slack).
    k: f64,
}

/// Signal counts of a CUSUM run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CusumInterpretation {
    /// Status from the share of signalling points in either direction.
    pub status: ProcessStatus,
    /// Points where the upper accumulator exceeds `h`.
    pub above_target: usize,
    /// Points where the lower accumulator exceeds `h`.
    pub below_target: usize,
}

/// Result of CUSUM analysis of a series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CusumResult {
    /// Upper accumulator C+, one value per observation.
    pub positive: Vec<f64>,
    /// Lower accumulator C-, one value per observation.
    pub negative: Vec<f64>,
    /// Decision interval h.
    pub decision_interval: f64,
    /// Target the accumulators were run against.
    pub target: f64,
    /// Status and directional signal counts.
    pub interpretation: CusumInterpretation,
}

impl CusumResult {
    /// Indices where either accumulator exceeds the decision interval.
    pub fn signal_points(&self) -> Vec<usize> {
        let h = self.decision_interval;
        self.positive
            .iter()
            .zip(&self.negative)
            .enumerate()
            .filter(|&(_, (&hi, &lo))| hi > h || lo > h)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Cusum {
    /// Creates a CUSUM chart for the given target and reference value.
    ///
    /// # Errors
    ///
    /// `ParameterOutOfRange` if `target` or `k` is not finite.
    pub fn new(target: f64, k: f64) -> Result<Self> {
        if !target.is_finite() {
            return Err(SpcError::out_of_range("target", target, "a finite number"));
        }
        if !k.is_finite() {
            return Err(SpcError::out_of_range("k", k, "a finite number"));
        }
        Ok(Self { target, k })
    }

    /// Target process mean.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Reference value.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Runs both accumulators over `data` and counts signals.
    ///
    /// # Errors
    ///
    /// `EmptyInput`, `InsufficientData` (fewer than 2 points) or `NonFinite`.
    ///
    /// # Complexity
    ///
    /// Time: O(n), Space: O(n)
    pub fn analyze(&self, data: &[f64]) -> Result<CusumResult> {
        stats::validate_series(data, 2)?;
        let spread = stats::rms_deviation(data, self.target)?;
        let h = DECISION_INTERVAL_MULTIPLIER * spread;

        let upper_ref = self.target + self.k;
        let lower_ref = self.target - self.k;

        let mut positive = Vec::with_capacity(data.len());
        let mut negative = Vec::with_capacity(data.len());
        let mut c_pos = 0.0_f64;
        let mut c_neg = 0.0_f64;
        for &x in data {
            c_pos = (x - upper_ref + c_pos).max(0.0);
            c_neg = (lower_ref - x + c_neg).max(0.0);
            positive.push(c_pos);
            negative.push(c_neg);
        }

        let above_target = positive.iter().filter(|&&c| c > h).count();
        let below_target = negative.iter().filter(|&&c| c > h).count();

        Ok(CusumResult {
            interpretation: CusumInterpretation {
                status: process_status(above_target + below_target, data.len()),
                above_target,
                below_target,
            },
            positive,
            negative,
            decision_interval: h,
            target: self.target,
        })
    }
}

/// Runs a CUSUM analysis against `target` with reference value `k`.
///
/// Shorthand for `Cusum::new(target, k)?.analyze(data)`.
///
/// # Errors
///
/// See [`Cusum::new`] and [`Cusum::analyze`].
pub fn cusum(data: &[f64], target: f64, k: f64) -> Result<CusumResult> {
    Cusum::new(target, k)?.analyze(data)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn accumulators_never_negative(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..=80),
            target in -1e3_f64..1e3,
            k in 0.0_f64..10.0,
        ) {
            let result = cusum(&data, target, k).unwrap();
            prop_assert_eq!(result.positive.len(), data.len());
            prop_assert_eq!(result.negative.len(), data.len());
            prop_assert!(result.positive.iter().all(|&c| c >= 0.0));
            prop_assert!(result.negative.iter().all(|&c| c >= 0.0));
            prop_assert!(result.decision_interval >= 0.0);
        }

        #[test]
        fn on_target_series_never_accumulates(
            target in -1e3_f64..1e3,
            n in 2_usize..50,
            k in 0.0_f64..5.0,
        ) {
            let data = vec![target; n];
            let result = cusum(&data, target, k).unwrap();
            prop_assert!(result.positive.iter().all(|&c| c == 0.0));
            prop_assert!(result.negative.iter().all(|&c| c == 0.0));
        }
    }
}
