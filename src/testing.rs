//! Quick validation checks.
//!
//! A z-style test of an observed mean against an expected one, and an
//! Anderson-Darling normality screen with a fixed critical value. Both are
//! screening aids for a capability study: they report a decision against a
//! single critical value and no p-value.
//!
//! # Examples
//!
//! ```
//! use u_spc::testing::mean_test;
//!
//! let r = mean_test(10.4, 10.0, 1.0, 36).unwrap();
//! assert!((r.statistic - 2.4).abs() < 1e-12);
//! assert!(r.significant);
//! ```

use u_numflow::special;

use crate::error::{Result, SpcError};
use crate::stats;

/// Two-tailed critical value at the 5 % level.
pub const Z_CRITICAL_95: f64 = 1.96;

/// Critical value of A² below which a sample is accepted as normal.
pub const AD_CRITICAL: f64 = 0.752;

/// Outcome of [`mean_test`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanTest {
    /// Test statistic `(observed - expected) / (std_dev / sqrt(n))`.
    pub statistic: f64,
    /// Whether `|statistic|` exceeds [`Z_CRITICAL_95`].
    pub significant: bool,
}

/// Outcome of [`anderson_darling`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalityCheck {
    /// The A² statistic, without sample-size correction.
    pub statistic: f64,
    /// Whether `statistic` is below [`AD_CRITICAL`].
    pub is_normal: bool,
}

// ---------------------------------------------------------------------------
// Mean test
// ---------------------------------------------------------------------------

/// Tests an observed mean against an expected mean.
///
/// # Algorithm
///
/// t = (x̄_obs - x̄_exp) / (s / √n), compared against 1.96.
///
/// # Errors
///
/// - `ParameterOutOfRange` if `n` is 0, a mean is not finite, or `std_dev`
///   is negative or not finite.
/// - `DivisionByZero` if `std_dev` is 0.
pub fn mean_test(observed: f64, expected: f64, std_dev: f64, n: usize) -> Result<MeanTest> {
    if !observed.is_finite() {
        return Err(SpcError::out_of_range("observed", observed, "a finite number"));
    }
    if !expected.is_finite() {
        return Err(SpcError::out_of_range("expected", expected, "a finite number"));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(SpcError::out_of_range("std_dev", std_dev, "a finite number >= 0"));
    }
    if n == 0 {
        return Err(SpcError::out_of_range("n", 0.0, "at least 1"));
    }
    if std_dev == 0.0 {
        return Err(SpcError::DivisionByZero {
            quantity: "mean test statistic",
        });
    }

    let standard_error = std_dev / (n as f64).sqrt();
    let statistic = (observed - expected) / standard_error;
    Ok(MeanTest {
        statistic,
        significant: statistic.abs() > Z_CRITICAL_95,
    })
}

// ---------------------------------------------------------------------------
// Normality
// ---------------------------------------------------------------------------

/// Anderson-Darling normality screen.
///
/// # Algorithm
///
/// 1. Standardize sorted data: zᵢ = (x₍ᵢ₎ - x̄) / s
/// 2. A² = -n - (1/n) Σᵢ (2i-1) [ln Φ(zᵢ) + ln(1 - Φ(z_{n+1-i}))]
/// 3. Accept normality when A² < 0.752.
///
/// # Errors
///
/// - `EmptyInput`, `InsufficientData` (fewer than 2 points) or `NonFinite`.
/// - `DivisionByZero` if all observations are equal.
///
/// # References
///
/// Anderson & Darling (1952). "Asymptotic theory of certain goodness of
/// fit criteria based on stochastic processes". Annals of Mathematical
/// Statistics, 23(2), 193–212.
pub fn anderson_darling(data: &[f64]) -> Result<NormalityCheck> {
    let mean = stats::mean(data)?;
    let sd = stats::sample_std_dev(data)?;
    if sd < 1e-300 {
        return Err(SpcError::DivisionByZero {
            quantity: "normality statistic",
        });
    }

    let mut x = data.to_vec();
    x.sort_by(f64::total_cmp);

    let n = x.len();
    let nf = n as f64;
    let cdf = |v: f64| special::standard_normal_cdf((v - mean) / sd).clamp(1e-15, 1.0 - 1e-15);

    let mut s = 0.0;
    for i in 0..n {
        let phi = cdf(x[i]);
        let phi_rev = cdf(x[n - 1 - i]);
        let coeff = (2 * (i + 1) - 1) as f64;
        s += coeff * (phi.ln() + (1.0 - phi_rev).ln());
    }

    let statistic = -nf - s / nf;
    Ok(NormalityCheck {
        statistic,
        is_normal: statistic < AD_CRITICAL,
    })
}
