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

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored data could not be mapped to or from domain types.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A uniqueness or check constraint rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
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

    /// Map a sqlx error, keeping unique-index rejections distinguishable.
    pub fn from_sqlx(operation: &'static str, err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::constraint(format!("{operation}: {}", db.message()))
            }
            _ => Self::database(operation, err),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            RepoError::not_found("Character", 9).to_string(),
            "Character not found: 9"
        );
        assert_eq!(
            RepoError::database("save_character", "disk I/O error").to_string(),
            "Database error in save_character: disk I/O error"
        );
        assert!(RepoError::not_found("Character", 1).is_not_found());
        assert!(!RepoError::constraint("dup").is_not_found());
    }

    #[test]
    fn non_database_sqlx_errors_stay_database_errors() {
        let err = RepoError::from_sqlx("get_character", sqlx::Error::RowNotFound);
        assert!(matches!(
            err,
            RepoError::Database {
                operation: "get_character",
                ..
            }
        ));
    }
}
