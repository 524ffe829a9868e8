//! Unified error types for the domain layer
//!
//! Caller-input failures of the guild's rules. Lookups of unknown records
//! and storage failures are reported by the engine.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value is outside its allowed set or shape (e.g. unknown class)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule would be broken (duplicate name)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The operation needs state the entity does not have
    #[error("Nothing to do: {0}")]
    EmptyState(String),
}

impl DomainError {
    /// Creates a validation error for values outside their allowed set.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Character name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an empty state error
    pub fn empty_state(msg: impl Into<String>) -> Self {
        Self::EmptyState(msg.into())
    }
}
