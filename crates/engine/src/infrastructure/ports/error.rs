//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A unique key is already taken by another record.
    #[error("{entity_type} already exists: {key}")]
    AlreadyExists {
        entity_type: &'static str,
        key: String,
    },

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored data could not be mapped back into domain types.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage constraint violated (e.g. a counter at its ceiling).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Conditional writes kept losing to concurrent writers.
    #[error("Concurrent update conflict on {entity_type} {id}")]
    Conflict {
        entity_type: &'static str,
        id: String,
    },
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create an AlreadyExists error for a taken unique key.
    pub fn already_exists(entity_type: &'static str, key: impl ToString) -> Self {
        Self::AlreadyExists {
            entity_type,
            key: key.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a ConstraintViolation error.
    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }

    /// Create a Conflict error after exhausted compare-and-set attempts.
    pub fn conflict(entity_type: &'static str, id: impl ToString) -> Self {
        Self::Conflict {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an AlreadyExists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
