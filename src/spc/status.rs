//! Process status classification shared by the monitoring charts.
//!
//! The status is derived from the share of flagged points, never from a
//! single observation, so EWMA and CUSUM report comparable severities.

use std::fmt;

/// Flagged-point ratio above which a process is out of control.
pub const OUT_OF_CONTROL_RATIO: f64 = 0.10;

/// Flagged-point ratio above which a process deserves a warning.
pub const WARNING_RATIO: f64 = 0.05;

/// Categorical state of a monitored process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ProcessStatus {
    /// At most 5 % of points flagged.
    Stable,
    /// More than 5 % and at most 10 % of points flagged.
    Warning,
    /// More than 10 % of points flagged.
    OutOfControl,
}

impl ProcessStatus {
    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Warning => "warning",
            Self::OutOfControl => "out of control",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a process from the number of flagged points out of `total`.
///
/// Both thresholds are strict: exactly 5 % flagged is still stable and
/// exactly 10 % is a warning. An empty chart (`total == 0`) is stable.
///
/// # Examples
///
/// ```
/// use u_spc::spc::{process_status, ProcessStatus};
///
/// assert_eq!(process_status(0, 20), ProcessStatus::Stable);
/// assert_eq!(process_status(2, 20), ProcessStatus::Warning);
/// assert_eq!(process_status(3, 20), ProcessStatus::OutOfControl);
/// ```
pub fn process_status(flagged: usize, total: usize) -> ProcessStatus {
    if total == 0 {
        return ProcessStatus::Stable;
    }
    let ratio = flagged as f64 / total as f64;
    if ratio > OUT_OF_CONTROL_RATIO {
        ProcessStatus::OutOfControl
    } else if ratio > WARNING_RATIO {
        ProcessStatus::Warning
    } else {
        ProcessStatus::Stable
    }
}
