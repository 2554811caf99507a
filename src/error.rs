// third-party imports
use thiserror::Error;

/// Error is an error which may occur while matching a candidate against a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("pattern and candidate must be non-empty, got pattern {pattern:?} and candidate {candidate:?}")]
    InvalidArgument { pattern: String, candidate: String },
    #[error("pattern must be non-empty")]
    EmptyPattern,
    #[error("internal error: fixed segment {segment:?} contains an asterisk")]
    InvariantViolation { segment: String },
}

impl Error {
    /// Returns true if the error is caused by the caller's input rather than by a defect in the matcher.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::EmptyPattern)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
