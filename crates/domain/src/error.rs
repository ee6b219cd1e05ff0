//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction and parsing,
//! so adapters never need to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for field constraint violations.
    ///
    /// Use this when a value object refuses its input:
    /// - Required fields are blank
    /// - Lengths or numbers are outside the allowed range
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Movie name cannot be blank"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Genre {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "DRAMA" => Ok(Self::Drama),
    ///             _ => Err(DomainError::parse(format!("Unknown genre: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
