//! Error types shared across the beamnest crates.

use thiserror::Error;

/// Errors produced by nesting operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The run configuration was rejected before any placement attempt.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A panel record failed validation.
    #[error("invalid panel: {0}")]
    InvalidPanel(String),

    /// Internal consistency fault in the partitioning logic. Aborts the run.
    #[error("internal error: {0}")]
    Internal(String),

    /// A run result violated one of the partition invariants.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type alias for beamnest operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfig("sheet width must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: sheet width must be positive"
        );
    }
}
