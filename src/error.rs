//! Error types for the SPC engine.
//!
//! Every computation either returns a complete result record or one of the
//! variants below. Nothing in this crate substitutes a zero for a failed
//! computation, so a `DivisionByZero` can never be mistaken for a capability
//! index of `0.0`.

use thiserror::Error;

/// Coarse classification of an [`SpcError`].
///
/// Callers that only need to decide how to present a failure (e.g. "fix your
/// input" vs. "this process has no spread") can match on the kind instead of
/// the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, empty or too-short data, or a parameter out of range.
    InvalidInput,
    /// A zero standard deviation was supplied where it is a divisor.
    DivisionByZero,
    /// The sigma-level approximation is undefined for the given DPMO.
    DomainError,
}

/// The error type for all SPC computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpcError {
    // ============ Input Errors ============
    /// No observations were supplied.
    #[error("no observations supplied")]
    EmptyInput,

    /// Fewer observations than the computation needs.
    #[error("need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        actual: usize,
    },

    /// An observation is NaN or infinite.
    #[error("observation at index {index} is not a finite number")]
    NonFinite {
        /// Position of the offending observation.
        index: usize,
    },

    /// A scalar parameter lies outside its valid range.
    #[error("parameter `{name}` = {value} is out of range (expected {expected})")]
    ParameterOutOfRange {
        /// Parameter name as it appears in the API.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the valid range.
        expected: &'static str,
    },

    /// A token of delimited input could not be read as a number.
    #[error("cannot read `{token}` as a finite number")]
    Parse {
        /// The trimmed token that failed to parse.
        token: String,
    },

    // ============ Arithmetic Errors ============
    /// A quantity is undefined because the spread of the data is zero.
    #[error("standard deviation is zero, {quantity} is undefined")]
    DivisionByZero {
        /// What could not be computed.
        quantity: &'static str,
    },

    /// The sigma-level conversion is undefined for this defect rate.
    #[error("sigma level is undefined for dpmo = {dpmo}: {reason}")]
    Domain {
        /// The defect rate that fell outside the approximation's domain.
        dpmo: f64,
        /// Why the conversion is undefined.
        reason: &'static str,
    },
}

/// A specialized `Result` type for SPC computations.
pub type Result<T, E = SpcError> = std::result::Result<T, E>;

impl SpcError {
    /// Maps this error onto the three-way taxonomy.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::InsufficientData { .. }
            | Self::NonFinite { .. }
            | Self::ParameterOutOfRange { .. }
            | Self::Parse { .. } => ErrorKind::InvalidInput,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::Domain { .. } => ErrorKind::DomainError,
        }
    }

    /// Create a new `ParameterOutOfRange` error.
    #[must_use]
    pub(crate) fn out_of_range(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::ParameterOutOfRange {
            name,
            value,
            expected,
        }
    }
}
