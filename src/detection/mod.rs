//! Shift and trend detection.
//!
//! Monitoring charts that accumulate evidence across observations, so small
//! persistent shifts show up before any single point crosses a Shewhart limit.
//!
//! # Charts
//!
//! - [`Cusum`] — Cumulative Sum chart (Page, 1954) for detecting small persistent shifts
//! - [`Ewma`] — Exponentially Weighted Moving Average chart (Roberts, 1959)
//!
//! Both report a [`ProcessStatus`](crate::spc::ProcessStatus) computed from the
//! share of signalling points.
//!
//! # References
//!
//! - Page, E.S. (1954). "Continuous Inspection Schemes",
//!   *Biometrika* 41(1/2), pp. 100-115.
//! - Roberts, S.W. (1959). "Control Chart Tests Based on Geometric Moving Averages",
//!   *Technometrics* 1(3), pp. 239-250.

mod cusum;
mod ewma;

pub use cusum::{cusum, Cusum, CusumInterpretation, CusumResult, DECISION_INTERVAL_MULTIPLIER};
pub use ewma::{
    classify_trend, ewma, Ewma, EwmaInterpretation, EwmaLimits, EwmaResult, Trend, TREND_RATIO,
};
