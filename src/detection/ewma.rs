//! Exponentially Weighted Moving Average (EWMA) chart for detecting small shifts.
//!
//! # Algorithm
//!
//! The statistic is seeded with the first observation and updated left to
//! right:
//!
//! ```text
//! Z_0 = x_0
//! Z_i = lambda * x_i + (1 - lambda) * Z_{i-1}
//! ```
//!
//! so `Z_0 == x_0` exactly. Control limits use the mean and sample standard
//! deviation of the raw series with the variance-reduction factor evaluated
//! at the series length n:
//!
//! ```text
//! factor = sqrt(lambda / (2 - lambda) * (1 - (1 - lambda)^(2n)))
//! UCL = mean + 3 * sigma * factor
//! LCL = mean - 3 * sigma * factor
//! ```
//!
//! # Parameters
//!
//! - **lambda**: smoothing constant in (0, 1]. Smaller values give more weight
//!   to historical data and are better at detecting small shifts.
//!   Typical range: 0.05-0.25. `lambda = 1` disables smoothing.
//!
//! # Reference
//!
//! Roberts, S.W. (1959). "Control Chart Tests Based on Geometric Moving Averages",
//! *Technometrics* 1(3), pp. 239-250.

use std::fmt;

use crate::error::{Result, SpcError};
use crate::spc::{process_status, ProcessStatus, SIGMA_MULTIPLIER};
use crate::stats;

/// Share of consecutive steps in one direction that constitutes a trend.
pub const TREND_RATIO: f64 = 0.70;

/// EWMA chart parameters.
///
/// # Examples
///
/// ```
/// use u_spc::detection::{Ewma, Trend};
///
/// let ewma = Ewma::new(0.2).unwrap();
/// let result = ewma.analyze(&[10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
/// assert_eq!(result.values[0], 10.0);
/// assert!((result.values[1] - 10.4).abs() < 1e-12);
/// assert_eq!(result.interpretation.trend, Trend::Ascending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ewma {
    /// Smoothing constant (0 < lambda <= 1).
    lambda: f64,
}

/// Asymptotic control limits of an EWMA chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EwmaLimits {
    /// Upper control limit.
    pub ucl: f64,
    /// Lower control limit.
    pub lcl: f64,
    /// Center line: mean of the raw series.
    pub mean: f64,
}

/// Categorical reading of an EWMA trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EwmaInterpretation {
    /// Status from the share of smoothed points beyond the limits.
    pub status: ProcessStatus,
    /// Number of smoothed points beyond the limits.
    pub out_of_control: usize,
    /// Direction of the smoothed trajectory.
    pub trend: Trend,
}

/// Result of EWMA analysis of a series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EwmaResult {
    /// Smoothed values, one per observation.
    pub values: Vec<f64>,
    /// Control limits.
    pub limits: EwmaLimits,
    /// Status, out-of-control count and trend.
    pub interpretation: EwmaInterpretation,
}

impl EwmaResult {
    /// Indices of smoothed values strictly beyond the control limits.
    pub fn signal_points(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &z)| z > self.limits.ucl || z < self.limits.lcl)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Ewma {
    /// Creates an EWMA chart with smoothing constant `lambda`.
    ///
    /// # Errors
    ///
    /// `ParameterOutOfRange` unless `0 < lambda <= 1`.
    pub fn new(lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda <= 0.0 || lambda > 1.0 {
            return Err(SpcError::out_of_range("lambda", lambda, "0 < lambda <= 1"));
        }
        Ok(Self { lambda })
    }

    /// Smoothing constant.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Variance-reduction factor for a series of `n` observations.
    ///
    /// ```text
    /// sqrt(lambda / (2 - lambda) * (1 - (1 - lambda)^(2n)))
    /// ```
    pub fn limit_factor(&self, n: usize) -> f64 {
        let asymptotic_var = self.lambda / (2.0 - self.lambda);
        let exponent = 2.0 * n as f64;
        let decay = (1.0 - self.lambda).powf(exponent);
        (asymptotic_var * (1.0 - decay)).sqrt()
    }

    /// Smoothed trajectory of `data`, seeded with the first observation.
    ///
    /// Returns an empty vector for empty input.
    pub fn smooth(&self, data: &[f64]) -> Vec<f64> {
        let Some(&seed) = data.first() else {
            return Vec::new();
        };
        data.iter()
            .scan(seed, |z, &x| {
                *z = self.lambda * x + (1.0 - self.lambda) * *z;
                Some(*z)
            })
            .collect()
    }

    /// Analyzes a series: trajectory, limits and interpretation.
    ///
    /// # Errors
    ///
    /// `EmptyInput`, `InsufficientData` (fewer than 2 points) or `NonFinite`.
    ///
    /// # Complexity
    ///
    /// Time: O(n), Space: O(n)
    pub fn analyze(&self, data: &[f64]) -> Result<EwmaResult> {
        let mean = stats::mean(data)?;
        let sigma = stats::sample_std_dev(data)?;

        let values = self.smooth(data);
        let half_width = SIGMA_MULTIPLIER * sigma * self.limit_factor(data.len());
        let limits = EwmaLimits {
            ucl: mean + half_width,
            lcl: mean - half_width,
            mean,
        };

        let out_of_control = values
            .iter()
            .filter(|&&z| z > limits.ucl || z < limits.lcl)
            .count();

        Ok(EwmaResult {
            interpretation: EwmaInterpretation {
                status: process_status(out_of_control, values.len()),
                out_of_control,
                trend: classify_trend(&values),
            },
            values,
            limits,
        })
    }
}

/// Runs an EWMA analysis with smoothing constant `lambda`.
///
/// Shorthand for `Ewma::new(lambda)?.analyze(data)`.
///
/// # Errors
///
/// See [`Ewma::new`] and [`Ewma::analyze`].
pub fn ewma(data: &[f64], lambda: f64) -> Result<EwmaResult> {
    Ewma::new(lambda)?.analyze(data)
}

/// Direction of a sequence of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    /// More than 70 % of steps strictly increase.
    Ascending,
    /// More than 70 % of steps strictly decrease.
    Descending,
    /// Neither direction dominates.
    NoClearTrend,
    /// Fewer than two values.
    InsufficientData,
}

impl Trend {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending trend",
            Self::Descending => "descending trend",
            Self::NoClearTrend => "no clear trend",
            Self::InsufficientData => "insufficient data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies the direction of consecutive steps in `values`.
///
/// Flat steps count toward neither direction.
pub fn classify_trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::InsufficientData;
    }
    let (up, down) = values.windows(2).fold((0_usize, 0_usize), |(up, down), w| {
        if w[1] > w[0] {
            (up + 1, down)
        } else if w[1] < w[0] {
            (up, down + 1)
        } else {
            (up, down)
        }
    });
    let steps = (values.len() - 1) as f64;
    if up as f64 / steps > TREND_RATIO {
        Trend::Ascending
    } else if down as f64 / steps > TREND_RATIO {
        Trend::Descending
    } else {
        Trend::NoClearTrend
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_length_and_seed(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..=60),
            lambda in 0.01_f64..=1.0,
        ) {
            let result = ewma(&data, lambda).unwrap();
            prop_assert_eq!(result.values.len(), data.len());
            prop_assert_eq!(result.values[0], data[0]);
            prop_assert!(result.limits.lcl <= result.limits.mean);
            prop_assert!(result.limits.mean <= result.limits.ucl);
        }

        #[test]
        fn smoothed_values_stay_within_data_range(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..=60),
            lambda in 0.01_f64..=1.0,
        ) {
            let (lo, hi) = stats::min_max(&data).unwrap();
            let result = ewma(&data, lambda).unwrap();
            for &z in &result.values {
                prop_assert!(z >= lo - 1e-9 && z <= hi + 1e-9);
            }
        }
    }
}
