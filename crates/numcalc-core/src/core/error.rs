//! Error types for numeric operations.
//!
//! Every public entry point that can reject its input reports the failure
//! through [`NumericError`]. Validation happens at function entry, before
//! any arithmetic is performed.

use thiserror::Error;

/// Errors that can occur when calling a numeric operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// An argument failed validation.
    ///
    /// Raised when an operand is not a number, when a function argument is
    /// not callable, or when an estimator is configured with a step size
    /// it cannot use.
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected argument
        argument: String,
        /// Description of why the argument was rejected
        reason: String,
    },
}

impl NumericError {
    /// Create an InvalidArgument error for the named argument.
    pub fn invalid_argument<S1, S2>(argument: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Name of the argument that caused the error.
    pub fn argument(&self) -> &str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// Result type alias for operations that can produce NumericError.
pub type Result<T> = std::result::Result<T, NumericError>;
