//! Domain error model.
//!
//! Deterministic failures raised by the domain layer itself. Infrastructure
//! never surfaces errors through this type: storage failures are logged and
//! swallowed, HTTP failures are expressed as response envelopes.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_detail() {
        assert_eq!(
            DomainError::invalid_id("BookingId: empty").to_string(),
            "invalid identifier: BookingId: empty"
        );
        assert_eq!(
            DomainError::validation("age out of range").to_string(),
            "validation failed: age out of range"
        );
    }
}
