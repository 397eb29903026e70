use thiserror::Error;

/// Errors raised at the boundary of the signal operations.
///
/// Every operation validates its inputs before producing any samples, so a
/// failure never leaves a partially built signal behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// Negative or non-finite duration, zero sample rate, or nothing to mix
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two signals (or a signal and its grid) disagree on sample count
    #[error("shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl SignalError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SignalError::InvalidArgument(reason.into())
    }
}

/// Result type for signal operations
pub type Result<T> = std::result::Result<T, SignalError>;
