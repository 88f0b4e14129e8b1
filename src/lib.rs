//! # u-spc
//!
//! Statistical process control (SPC) for individual measurements: control
//! limits, process capability, EWMA and CUSUM monitoring, and conversion of
//! defect rates to sigma levels.
//!
//! Every computation is a pure function over a slice of `f64` observations
//! and a few numeric parameters. Each returns a self-contained result record
//! with a categorical interpretation, or a typed [`SpcError`]. There is no
//! state between calls.
//!
//! ## Modules
//!
//! - [`stats`] — Mean, sample standard deviation, deviation about a target
//! - [`distribution`] — Equal-width histogram binning
//! - [`spc`] — Shewhart limits, individuals chart, run and range charts, process status
//! - [`capability`] — Cp/Cpk with interpretations, DPMO and sigma level
//! - [`detection`] — EWMA and CUSUM monitoring charts
//! - [`testing`] — Mean test and Anderson-Darling normality screen
//! - [`msa`] — Gauge R&R grading
//! - [`report`] — Capability study bundling chart, indices and histogram
//! - [`parse`] — Comma-separated text to a sample series
//!
//! ## Example
//!
//! ```
//! use u_spc::capability::ProcessCapability;
//! use u_spc::detection::ewma;
//! use u_spc::parse::parse_series;
//!
//! let series = parse_series("10,12,11,13,12").unwrap();
//! let idx = ProcessCapability::new(12.0, 8.0).compute(&series).unwrap();
//! assert!(idx.cpk <= idx.cp);
//!
//! let smoothed = ewma(&series, 0.2).unwrap();
//! assert_eq!(smoothed.values.len(), series.len());
//! ```
//!
//! ## Design Philosophy
//!
//! - **No silent defaults**: an undefined quantity is an error, never a zero
//! - **Numerical stability**: Leverages `u-numflow` for stable statistics
//! - **Research-backed**: algorithms reference the quality-control literature

pub mod capability;
pub mod detection;
pub mod distribution;
pub mod error;
pub mod msa;
pub mod parse;
pub mod report;
pub mod spc;
pub mod stats;
pub mod testing;

pub use error::{ErrorKind, Result, SpcError};
