//! Descriptive statistics with explicit failure modes.
//!
//! Thin wrappers over [`u_numflow::stats`]: the numerics come from
//! `u-numflow`, and this module turns its `Option` results into typed
//! [`SpcError`]s.
//!
//! Every function rejects empty input and non-finite observations instead of
//! propagating NaN into downstream limits and indices.

use crate::error::{Result, SpcError};

/// Checks that `data` holds at least `required` finite observations.
pub(crate) fn validate_series(data: &[f64], required: usize) -> Result<()> {
    if data.is_empty() {
        return Err(SpcError::EmptyInput);
    }
    if data.len() < required {
        return Err(SpcError::InsufficientData {
            required,
            actual: data.len(),
        });
    }
    if let Some(index) = data.iter().position(|x| !x.is_finite()) {
        return Err(SpcError::NonFinite { index });
    }
    Ok(())
}

/// Computes the arithmetic mean.
///
/// # Errors
///
/// `EmptyInput` if `data` is empty, `NonFinite` if any value is NaN or
/// infinite.
///
/// # Examples
///
/// ```
/// use u_spc::stats::mean;
///
/// let m = mean(&[10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
/// assert!((m - 11.6).abs() < 1e-12);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    validate_series(data, 1)?;
    u_numflow::stats::mean(data).ok_or(SpcError::EmptyInput)
}

/// Computes the sample (Bessel-corrected) standard deviation.
///
/// ```text
/// s = sqrt( Σ (x_i - x̄)² / (n - 1) )
/// ```
///
/// # Errors
///
/// `InsufficientData` if fewer than 2 observations, `NonFinite` if any
/// value is NaN or infinite.
///
/// # Examples
///
/// ```
/// use u_spc::stats::sample_std_dev;
///
/// let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.138089935299395).abs() < 1e-10);
/// assert!(sample_std_dev(&[1.0]).is_err());
/// ```
pub fn sample_std_dev(data: &[f64]) -> Result<f64> {
    validate_series(data, 2)?;
    u_numflow::stats::std_dev(data).ok_or(SpcError::InsufficientData {
        required: 2,
        actual: data.len(),
    })
}

/// Root-mean-square deviation of `data` about a fixed `center`.
///
/// ```text
/// sqrt( Σ (x_i - center)² / n )
/// ```
///
/// Unlike [`sample_std_dev`] the deviation is measured around a supplied
/// reference value (e.g. a CUSUM target), not the sample mean, and the
/// denominator is `n`.
///
/// # Errors
///
/// `EmptyInput`/`NonFinite` for invalid data, `ParameterOutOfRange` if
/// `center` is not finite.
pub fn rms_deviation(data: &[f64], center: f64) -> Result<f64> {
    validate_series(data, 1)?;
    if !center.is_finite() {
        return Err(SpcError::out_of_range("center", center, "a finite number"));
    }
    let squares: Vec<f64> = data.iter().map(|&x| (x - center) * (x - center)).collect();
    let mean_square = u_numflow::stats::mean(&squares).ok_or(SpcError::EmptyInput)?;
    Ok(mean_square.sqrt())
}

/// Returns `(min, max)` of a series.
///
/// # Errors
///
/// `EmptyInput`/`NonFinite` for invalid data.
pub(crate) fn min_max(data: &[f64]) -> Result<(f64, f64)> {
    validate_series(data, 1)?;
    u_numflow::stats::min(data)
        .zip(u_numflow::stats::max(data))
        .ok_or(SpcError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_mean_of_known_series() {
        let m = mean(&[10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
        assert!((m - 11.6).abs() < 1e-12, "expected 11.6, got {m}");
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[4.25]).unwrap(), 4.25);
    }

    #[test]
    fn test_mean_rejects_empty() {
        let err = mean(&[]).unwrap_err();
        assert_eq!(err, SpcError::EmptyInput);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_mean_rejects_non_finite() {
        assert_eq!(
            mean(&[1.0, f64::NAN, 3.0]).unwrap_err(),
            SpcError::NonFinite { index: 1 }
        );
        assert_eq!(
            mean(&[1.0, 2.0, f64::INFINITY]).unwrap_err(),
            SpcError::NonFinite { index: 2 }
        );
    }

    #[test]
    fn test_std_dev_of_known_series() {
        let sd = sample_std_dev(&[10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
        // Σ(x - 11.6)² = 5.2, / 4 = 1.3
        assert!((sd - 1.3_f64.sqrt()).abs() < 1e-12, "got {sd}");
    }

    #[test]
    fn test_std_dev_of_constant_series_is_zero() {
        assert!(sample_std_dev(&[7.0; 10]).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_requires_two_points() {
        assert_eq!(
            sample_std_dev(&[1.0]).unwrap_err(),
            SpcError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
        assert_eq!(sample_std_dev(&[]).unwrap_err(), SpcError::EmptyInput);
    }

    #[test]
    fn test_std_dev_rejects_non_finite() {
        assert_eq!(
            sample_std_dev(&[1.0, 2.0, f64::NAN]).unwrap_err(),
            SpcError::NonFinite { index: 2 }
        );
    }

    #[test]
    fn test_rms_deviation_about_target() {
        // deviations from 100: -2, 2, -3, 1, -1 → Σ² = 19
        let d = rms_deviation(&[98.0, 102.0, 97.0, 101.0, 99.0], 100.0).unwrap();
        assert!((d - (19.0_f64 / 5.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rms_deviation_rejects_non_finite_center() {
        assert_eq!(
            rms_deviation(&[1.0, 2.0], f64::NAN).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_min_max_of_series() {
        assert_eq!(min_max(&[3.0, -1.0, 8.5, 2.0]).unwrap(), (-1.0, 8.5));
        assert_eq!(min_max(&[]).unwrap_err(), SpcError::EmptyInput);
    }
}
