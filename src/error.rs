//! Error types shared by the catalog examples.
//!
//! Every example that rejects invalid input returns the same crate-level
//! error with a human-readable message. There is deliberately no retry or
//! recovery machinery: failures propagate straight to the caller, which is
//! exactly the behavior the cataloged scenarios illustrate.

use thiserror::Error;

/// Result type alias used throughout the catalog.
pub type Result<T, E = SmellbookError> = std::result::Result<T, E>;

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmellbookError {
    /// A precondition on input data failed (missing field, bad shape, range).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A lookup by name or id found nothing.
    #[error("{0} not found")]
    NotFound(String),

    /// An argument was structurally valid but unusable in context.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SmellbookError {
    /// Create a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error for a named entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create an invalid-argument error from any message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SmellbookError::validation("email is required");
        assert_eq!(err.to_string(), "validation failed: email is required");

        let err = SmellbookError::not_found("user bob");
        assert_eq!(err.to_string(), "user bob not found");
    }
}
