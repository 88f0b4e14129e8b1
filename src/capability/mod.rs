//! Process capability analysis.
//!
//! Computes capability indices for assessing how well a process meets its
//! specification limits, and converts defect rates to sigma levels.
//!
//! # Indices
//!
//! - **Cp** — Potential capability (spread vs tolerance)
//! - **Cpk** — Actual capability (centering considered)
//!
//! # Sigma Level
//!
//! - [`SixSigmaMetrics`] — DPMO, sigma level and yield from defect counts
//! - [`sigma_to_ppm`] — Convert sigma level to PPM defect rate
//! - [`ppm_to_sigma`] — Convert PPM defect rate to sigma level
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.

mod indices;
mod sigma_level;

pub use indices::{
    interpret_capability, interpret_centering, process_capability, CapabilityGrade,
    CapabilityIndices, Centering, ProcessCapability, CAPABLE_THRESHOLD, MARGINAL_THRESHOLD,
    SLIGHTLY_OFF_CENTER_GAP, WELL_CENTERED_GAP,
};
pub use sigma_level::{
    dpmo, interpret_sigma, ppm_to_sigma, process_yield, sigma_level, sigma_to_ppm, SigmaGrade,
    SixSigmaMetrics,
};
