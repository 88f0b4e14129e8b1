//! Run chart and moving-range summaries for individual observations.

use crate::error::{Result, SpcError};
use crate::stats;

/// Window of the trailing moving average drawn on a run chart.
pub const RUN_CHART_WINDOW: usize = 3;

/// Trailing moving average.
///
/// Point `i` is the mean of `data[i + 1 - window ..= i]`; the first
/// `window - 1` points average over the shorter prefix available. The output
/// has the same length as the input.
///
/// # Errors
///
/// `EmptyInput`/`NonFinite` for invalid data, `ParameterOutOfRange` if
/// `window` is zero.
///
/// # Examples
///
/// ```
/// use u_spc::spc::moving_average;
///
/// let ma = moving_average(&[3.0, 6.0, 9.0, 12.0], 3).unwrap();
/// assert_eq!(ma, vec![3.0, 4.5, 6.0, 9.0]);
/// ```
pub fn moving_average(data: &[f64], window: usize) -> Result<Vec<f64>> {
    stats::validate_series(data, 1)?;
    if window == 0 {
        return Err(SpcError::out_of_range("window", 0.0, "at least 1"));
    }

    (0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            stats::mean(&data[start..=i])
        })
        .collect()
}

/// Moving ranges `|x_i - x_{i-1}|` and their summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovingRanges {
    /// One range per consecutive pair (length = n - 1).
    pub ranges: Vec<f64>,
    /// Mean moving range (MR-bar).
    pub average: f64,
    /// Largest moving range.
    pub max: f64,
    /// Smallest moving range.
    pub min: f64,
}

/// Computes the moving ranges of consecutive observations.
///
/// # Errors
///
/// `InsufficientData` for fewer than 2 observations, `NonFinite` for NaN or
/// infinite values.
///
/// # Examples
///
/// ```
/// use u_spc::spc::moving_ranges;
///
/// let mr = moving_ranges(&[10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
/// assert_eq!(mr.ranges, vec![2.0, 1.0, 2.0, 1.0]);
/// assert!((mr.average - 1.5).abs() < 1e-12);
/// ```
pub fn moving_ranges(data: &[f64]) -> Result<MovingRanges> {
    stats::validate_series(data, 2)?;

    let ranges: Vec<f64> = data.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    let average = stats::mean(&ranges)?;
    let (min, max) = stats::min_max(&ranges)?;

    Ok(MovingRanges {
        ranges,
        average,
        max,
        min,
    })
}
