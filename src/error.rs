//! Error types for pose metric operations.
//!
//! All failures are detected at the call site and reported immediately;
//! nothing in this crate retries or recovers.

use thiserror::Error;

/// Main error type for pose metric operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Input validation errors.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Points have mismatched dimensionality.
    #[error("Dimension mismatch: expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A leg vector of the angle has zero length, so the angle is undefined.
    #[error("Degenerate input: zero-length {leg} vector")]
    DegenerateInput { leg: &'static str },

    /// Vector export attempted while a field is unset.
    #[error("Missing field: {field} is unset")]
    MissingField { field: &'static str },
}

/// Result type alias for pose metric operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

impl MetricsError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a dimension mismatch error.
    #[must_use]
    pub const fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create a degenerate input error for the named leg.
    #[must_use]
    pub const fn degenerate(leg: &'static str) -> Self {
        Self::DegenerateInput { leg }
    }

    /// Create a missing field error.
    #[must_use]
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
