//! Centralized error types for Pitchrank.

use thiserror::Error;

/// Main error type for Pitchrank operations.
///
/// The web layer maps each variant to an HTTP status: validation errors
/// become 400 before any engine round-trip, not-found becomes 404, and
/// engine failures become 500 with the underlying message attached.
#[derive(Error, Debug)]
pub enum PitchrankError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Graph engine error: {0}")]
    Engine(String),
}

/// Result type for Pitchrank operations.
pub type PitchrankResult<T> = Result<T, PitchrankError>;

impl PitchrankError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Wrap a downstream graph-engine failure, keeping its message.
    pub fn engine(err: impl std::fmt::Display) -> Self {
        Self::Engine(err.to_string())
    }
}
