//! Error types for stream construction and parameter validation.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building a cash flow stream or validating parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The stream has no entries.
    #[error("valid array of cash flows must have at least one entry")]
    EmptyStream,

    /// The first day offset is on or before day zero.
    #[error("first day offset must be after day zero, got {offset}")]
    NonPositiveFirstOffset {
        /// The offending offset.
        offset: f64,
    },

    /// A day offset does not move strictly forward.
    #[error(
        "day offsets must be strictly increasing: entry {index} has offset {offset} after {previous}"
    )]
    NonIncreasingDayOffset {
        /// Position of the offending entry.
        index: usize,
        /// The offending offset.
        offset: f64,
        /// The offset of the preceding entry.
        previous: f64,
    },

    /// Parallel input sequences have different lengths.
    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Name of the mismatched sequence.
        field: &'static str,
        /// Length of the amounts sequence.
        expected: usize,
        /// Length of the mismatched sequence.
        actual: usize,
    },

    /// An input value is NaN or infinite.
    #[error("{field} at entry {index} is not finite: {value}")]
    NonFinite {
        /// Name of the field holding the value.
        field: &'static str,
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A pricing parameter is out of range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns true if the error describes a malformed cash flow stream
    /// rather than a bad pricing parameter.
    #[must_use]
    pub fn is_invalid_stream(&self) -> bool {
        !matches!(self, Self::InvalidParameter { .. })
    }
}
