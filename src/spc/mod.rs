//! Statistical Process Control (SPC) charts for individual observations.
//!
//! # Charts
//!
//! - [`control_limits`] — Classical 3-sigma Shewhart limits
//! - [`IndividualsChart`] — Mean, sigma, limits and out-of-limit points of a series
//! - [`moving_average`] — Trailing moving average for run charts
//! - [`moving_ranges`] — Moving ranges for range charts
//!
//! # Status
//!
//! - [`process_status`] — Stable / warning / out-of-control from the share
//!   of flagged points, shared by the EWMA and CUSUM engines
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

mod chart;
mod run;
mod status;

pub use chart::{control_limits, ControlLimits, IndividualsChart, SIGMA_MULTIPLIER};
pub use run::{moving_average, moving_ranges, MovingRanges, RUN_CHART_WINDOW};
pub use status::{process_status, ProcessStatus, OUT_OF_CONTROL_RATIO, WARNING_RATIO};
