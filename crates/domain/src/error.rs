//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations so that adapters
//! never have to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty remedy text)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for vocabulary types read from strings)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if text.trim().is_empty() {
    ///     return Err(DomainError::validation("Remedy cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::validation("Remedy cannot be empty");
        assert_eq!(err.to_string(), "Validation failed: Remedy cannot be empty");

        let err = DomainError::parse("unknown mood 'angry'");
        assert_eq!(err.to_string(), "Parse error: unknown mood 'angry'");
    }
}
