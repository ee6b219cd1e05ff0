//! Validated text newtypes for movie records
//!
//! These newtypes ensure that text fields are valid by construction:
//! - Non-blank
//! - Within length limits (counted in characters, not bytes)
//! - Trimmed of leading/trailing whitespace

use std::fmt;

use crate::error::DomainError;

/// Maximum length for a movie name
pub const MAX_NAME_LENGTH: usize = 255;

/// Minimum length for a movie description
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Maximum length for a movie description
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

// ============================================================================
// MovieName
// ============================================================================

/// A validated movie name (non-blank, 1-255 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieName(String);

impl MovieName {
    /// Create a new validated movie name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is blank
    /// - The name exceeds 255 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Movie name cannot be blank"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Movie name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MovieName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MovieName> for String {
    fn from(name: MovieName) -> String {
        name.0
    }
}

// ============================================================================
// MovieDescription
// ============================================================================

/// A validated movie synopsis (non-blank, 10-1000 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieDescription(String);

impl MovieDescription {
    /// Create a new validated description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the description is blank or its
    /// trimmed length falls outside 10-1000 characters.
    pub fn new(description: impl Into<String>) -> Result<Self, DomainError> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Movie description cannot be blank"));
        }
        let len = trimmed.chars().count();
        if len < MIN_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "Movie description must be at least {} characters",
                MIN_DESCRIPTION_LENGTH
            )));
        }
        if len > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "Movie description cannot exceed {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MovieDescription {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MovieDescription> for String {
    fn from(description: MovieDescription) -> String {
        description.0
    }
}
