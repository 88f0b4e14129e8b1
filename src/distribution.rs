//! Histogram binning.
//!
//! # Examples
//!
//! ```
//! use u_spc::distribution::histogram;
//!
//! let data = [10.0, 12.0, 11.0, 13.0, 12.0];
//! let hist = histogram(&data, 3).unwrap();
//! assert_eq!(hist.counts, vec![1, 1, 3]);
//! assert_eq!(hist.counts.iter().sum::<usize>(), data.len());
//! ```

use crate::error::{Result, SpcError};
use crate::stats;

/// Number of bins used by a capability study histogram.
pub const DEFAULT_BINS: usize = 7;

/// Equal-width histogram over `[min, max]` of a series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Bin width. Zero when every observation has the same value.
    pub bin_width: f64,
    /// Bin edges (length = number of bins + 1).
    pub edges: Vec<f64>,
    /// Observation count per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Lower bound of every bin, suitable as bar labels.
    pub fn lower_bounds(&self) -> &[f64] {
        &self.edges[..self.counts.len()]
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Partitions `[min(data), max(data)]` into `num_bins` equal-width bins.
///
/// Each value goes to bin `floor((x - min) / width)`, clamped to the last
/// bin so the maximum is counted (the last bin is closed on the right).
/// When all values are equal the width is zero and every observation is
/// placed in bin 0.
///
/// # Errors
///
/// `EmptyInput`/`NonFinite` for invalid data, `ParameterOutOfRange` if
/// `num_bins` is zero.
pub fn histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    stats::validate_series(data, 1)?;
    if num_bins == 0 {
        return Err(SpcError::out_of_range("num_bins", 0.0, "at least 1"));
    }

    let (min_val, max_val) = stats::min_max(data)?;
    let n = num_bins as f64;
    let range = max_val - min_val;
    // A range beyond f64::MAX is binned on values scaled by the bin width.
    let overflows = !range.is_finite();
    let bin_width = if overflows {
        max_val / n - min_val / n
    } else {
        range / n
    };

    let edges: Vec<f64> = (0..=num_bins)
        .map(|i| {
            if overflows {
                let t = i as f64 / n;
                min_val * (1.0 - t) + max_val * t
            } else {
                min_val + i as f64 * bin_width
            }
        })
        .collect();

    let mut counts = vec![0_usize; num_bins];
    for &x in data {
        let bin = if bin_width > 0.0 {
            let position = if overflows {
                x / bin_width - min_val / bin_width
            } else {
                (x - min_val) / bin_width
            };
            (position.floor() as usize).min(num_bins - 1)
        } else {
            0
        };
        counts[bin] += 1;
    }

    Ok(Histogram {
        bin_width,
        edges,
        counts,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counts_sum_to_len(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..=200),
            bins in 1_usize..=20,
        ) {
            let hist = histogram(&data, bins).unwrap();
            prop_assert_eq!(hist.counts.iter().sum::<usize>(), data.len());
            prop_assert_eq!(hist.counts.len(), bins);
        }
    }
}
