//! Character service.
//!
//! Creates adventurers, hands out quests and turns completed quests into
//! experience and levels.

mod accept_quest;
mod complete_quest;
mod create_character;
mod error;
mod locks;

use std::sync::Arc;

use guildhall_domain::{Character, CharacterId, Quest};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};

pub use accept_quest::{AcceptQuest, AcceptQuestInput, AcceptQuestResult};
pub use complete_quest::CompleteQuest;
pub use create_character::CreateCharacter;
pub use error::CharacterError;
pub use locks::CharacterLocks;

/// Container for character use cases.
pub struct CharacterUseCases {
    pub ops: Arc<CharacterOps>,
    pub create: Arc<CreateCharacter>,
    pub accept_quest: Arc<AcceptQuest>,
    pub complete_quest: Arc<CompleteQuest>,
}

impl CharacterUseCases {
    pub fn new(
        ops: Arc<CharacterOps>,
        create: Arc<CreateCharacter>,
        accept_quest: Arc<AcceptQuest>,
        complete_quest: Arc<CompleteQuest>,
    ) -> Self {
        Self {
            ops,
            create,
            accept_quest,
            complete_quest,
        }
    }

    /// Wire every character use case against one store and clock.
    pub fn from_repo(repo: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        let locks = Arc::new(CharacterLocks::new());
        Self::new(
            Arc::new(CharacterOps::new(repo.clone())),
            Arc::new(CreateCharacter::new(repo.clone(), clock.clone())),
            Arc::new(AcceptQuest::new(repo.clone(), clock, locks.clone())),
            Arc::new(CompleteQuest::new(repo, locks)),
        )
    }
}

/// Read-only character operations.
pub struct CharacterOps {
    repo: Arc<dyn CharacterRepo>,
}

impl CharacterOps {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: CharacterId) -> Result<Character, CharacterError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CharacterError::not_found(id))
    }

    /// Look a character up by name: exact match first, then case-insensitive.
    pub async fn find_by_name(&self, name: &str) -> Result<Character, CharacterError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| CharacterError::not_found(name.trim()))
    }

    /// Held quests, oldest first.
    pub async fn list_quests(&self, id: CharacterId) -> Result<Vec<Quest>, CharacterError> {
        Ok(self.get(id).await?.quests().to_vec())
    }
}
