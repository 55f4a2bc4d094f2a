//! Error types for colorfinder-core
//!
//! Invalid caller input and internal invariant violations are kept in
//! separate variants so callers can tell a bad request from a bug.

use thiserror::Error;

/// Quantization error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No pixels were supplied
    #[error("null or empty input: no pixels to quantize")]
    EmptyInput,

    /// Requested palette size outside `[2, 256]`
    #[error("max colors must be between 2 and 256, got {0}")]
    InvalidMaxColors(usize),

    /// Invalid tuning option
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Box bounds outside the quantized cube or inverted
    #[error("invalid box bounds: r {r1}..={r2}, g {g1}..={g2}, b {b1}..={b2}")]
    InvalidBounds {
        r1: u8,
        r2: u8,
        g1: u8,
        g2: u8,
        b1: u8,
        b2: u8,
    },

    /// An internal invariant of the median cut did not hold
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Whether this error was caused by the caller's input rather than
    /// by the algorithm itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::InvalidMaxColors(_)
                | Error::InvalidOptions(_)
                | Error::InvalidBounds { .. }
        )
    }
}

/// Result type alias for quantization operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(Error::EmptyInput.is_invalid_input());
        assert!(Error::InvalidMaxColors(1).is_invalid_input());
        assert!(!Error::InvariantViolation("no cut".into()).is_invalid_input());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidMaxColors(300).to_string(),
            "max colors must be between 2 and 256, got 300"
        );
        assert!(
            Error::InvariantViolation("no cut point".into())
                .to_string()
                .contains("no cut point")
        );
    }
}
