//! Complete quest use case.
//!
//! The whole read-compute-write cycle runs under the character's lock, so
//! two concurrent completions can never consume the same quest.

use std::sync::Arc;

use guildhall_domain::{CharacterId, QuestCompleted};

use crate::infrastructure::ports::CharacterRepo;

use super::error::CharacterError;
use super::locks::CharacterLocks;

/// Completes a character's oldest pending quest.
pub struct CompleteQuest {
    repo: Arc<dyn CharacterRepo>,
    locks: Arc<CharacterLocks>,
}

impl CompleteQuest {
    pub fn new(repo: Arc<dyn CharacterRepo>, locks: Arc<CharacterLocks>) -> Self {
        Self { repo, locks }
    }

    /// Remove the oldest quest, apply its reward and persist.
    ///
    /// Nothing is written unless the whole transition succeeds.
    pub async fn execute(&self, character_id: CharacterId) -> Result<QuestCompleted, CharacterError> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self
            .repo
            .get(character_id)
            .await?
            .ok_or_else(|| CharacterError::not_found(character_id))?;

        let completed = character.complete_next_quest()?;

        if let Err(err) = self.repo.save(&character).await {
            tracing::warn!(
                character_id = %character_id,
                quest_name = %completed.quest.name(),
                error = %err,
                "Failed to persist quest completion"
            );
            return Err(err.into());
        }

        tracing::info!(
            character_id = %character_id,
            quest_name = %completed.quest.name(),
            experience_gained = completed.experience_gained,
            levels_gained = completed.levels_gained,
            level = completed.new_level,
            experience = completed.new_experience,
            "Quest completed"
        );

        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCharacterRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use guildhall_domain::{Character, CharacterClass, CharacterName, Quest, QuestName};

    fn character_with(id: CharacterId, level: u32, experience: u64, quests: &[(&str, u64)]) -> Character {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let quests = quests
            .iter()
            .map(|(name, reward)| Quest::new(QuestName::new(*name).unwrap(), at).with_reward(*reward))
            .collect();
        Character::from_parts(
            id,
            CharacterName::new("Brom").unwrap(),
            CharacterClass::Barbaro,
            level,
            experience,
            quests,
            at,
        )
    }

    fn use_case(repo: MockCharacterRepo) -> CompleteQuest {
        CompleteQuest::new(Arc::new(repo), Arc::new(CharacterLocks::new()))
    }

    #[tokio::test]
    async fn when_character_not_found_returns_error() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let result = use_case(repo).execute(CharacterId::from_i64(5)).await;

        assert!(matches!(result, Err(CharacterError::NotFound(_))));
    }

    #[tokio::test]
    async fn when_no_quests_returns_empty_state_and_saves_nothing() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character_with(id, 1, 0, &[]))));
        repo.expect_save().never();

        let result = use_case(repo).execute(id).await;

        assert!(matches!(result, Err(CharacterError::EmptyState(_))));
    }

    #[tokio::test]
    async fn completes_oldest_quest_and_levels_up() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character_with(id, 1, 90, &[("Rats", 50), ("Dragon", 500)]))));
        repo.expect_save()
            .withf(|character| {
                character.level() == 2
                    && character.experience() == 40
                    && character.quests().len() == 1
                    && character.quests()[0].name().as_str() == "Dragon"
            })
            .times(1)
            .returning(|_| Ok(()));

        let completed = use_case(repo).execute(id).await.expect("complete succeeds");

        assert_eq!(completed.quest.name().as_str(), "Rats");
        assert_eq!(completed.experience_gained, 50);
        assert_eq!(completed.levels_gained, 1);
        assert_eq!(completed.new_level, 2);
        assert_eq!(completed.new_experience, 40);
    }

    #[tokio::test]
    async fn large_reward_cascades_several_levels() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character_with(id, 1, 0, &[("Epic", 300)]))));
        repo.expect_save().returning(|_| Ok(()));

        let completed = use_case(repo).execute(id).await.expect("complete succeeds");

        assert_eq!(completed.new_level, 3);
        assert_eq!(completed.new_experience, 0);
        assert_eq!(completed.levels_gained, 2);
    }

    #[tokio::test]
    async fn when_save_fails_returns_repo_error() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character_with(id, 1, 0, &[("Rats", 50)]))));
        repo.expect_save()
            .returning(|_| Err(RepoError::database("save_character", "database is locked")));

        let result = use_case(repo).execute(id).await;

        assert!(matches!(result, Err(CharacterError::Repo(_))));
    }
}
