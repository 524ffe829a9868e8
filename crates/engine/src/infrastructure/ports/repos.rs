//! Repository port traits for database access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use guildhall_domain::{Character, CharacterClass, CharacterId, CharacterName};

use super::error::RepoError;

/// Character store. A character is always loaded and saved together with
/// its quest log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Register a new level 1 character and return it with its assigned id.
    ///
    /// Fails with `RepoError::ConstraintViolation` if the name is taken.
    async fn create(
        &self,
        name: &CharacterName,
        class: CharacterClass,
        created_at: DateTime<Utc>,
    ) -> Result<Character, RepoError>;

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;

    /// Exact name match first, then case-insensitive (lowest id wins).
    async fn find_by_name(&self, name: &str) -> Result<Option<Character>, RepoError>;

    /// Persist level, experience and the quest log atomically.
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
}
