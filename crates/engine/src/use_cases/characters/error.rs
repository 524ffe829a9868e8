//! Character service errors.

use guildhall_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during character and quest operations.
///
/// The first four variants are caller-input problems. `Repo` is an
/// infrastructure failure and must never be reported as one of them.
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Character not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Nothing to do: {0}")]
    EmptyState(String),

    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl CharacterError {
    pub fn not_found(key: impl ToString) -> Self {
        Self::NotFound(key.to_string())
    }
}

impl From<DomainError> for CharacterError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::EmptyState(msg) => Self::EmptyState(msg),
        }
    }
}

impl From<RepoError> for CharacterError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::ConstraintViolation(msg) => Self::Conflict(msg),
            RepoError::NotFound { id, .. } => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_kind() {
        assert!(matches!(
            CharacterError::from(DomainError::validation("bad class")),
            CharacterError::Validation(_)
        ));
        assert!(matches!(
            CharacterError::from(DomainError::empty_state("no quests")),
            CharacterError::EmptyState(_)
        ));
        assert!(matches!(
            CharacterError::from(DomainError::conflict("dup")),
            CharacterError::Conflict(_)
        ));
    }

    #[test]
    fn unique_violations_become_conflicts() {
        let err = CharacterError::from(RepoError::constraint("UNIQUE constraint failed"));
        assert!(matches!(err, CharacterError::Conflict(_)));
    }

    #[test]
    fn database_failures_stay_internal() {
        let err = CharacterError::from(RepoError::database("save_character", "disk full"));
        assert!(matches!(err, CharacterError::Repo(_)));
    }
}
