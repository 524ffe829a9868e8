//! Accept quest use case.

use std::sync::Arc;

use guildhall_domain::{CharacterId, Description, Quest, QuestAccepted, QuestName};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};

use super::error::CharacterError;
use super::locks::CharacterLocks;

/// Input for [`AcceptQuest::execute`].
#[derive(Debug, Clone)]
pub struct AcceptQuestInput {
    pub name: String,
    pub description: String,
    pub experience_reward: u64,
}

/// Outcome of accepting a quest.
#[derive(Debug, Clone)]
pub struct AcceptQuestResult {
    pub character_name: String,
    pub accepted: QuestAccepted,
}

impl AcceptQuestResult {
    pub fn message(&self) -> String {
        format!(
            "Quest '{}' accepted by {}",
            self.accepted.quest_name, self.character_name
        )
    }
}

/// Appends a quest to a character's log.
pub struct AcceptQuest {
    repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<CharacterLocks>,
}

impl AcceptQuest {
    pub fn new(
        repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self { repo, clock, locks }
    }

    /// Validate the quest, append it and persist.
    ///
    /// # Errors
    /// * `NotFound` - unknown character
    /// * `Validation` - empty or oversized quest name or description, or a
    ///   reward above `MAX_QUEST_REWARD`
    /// * `Conflict` - a quest with the same case-insensitive name is held
    pub async fn execute(
        &self,
        character_id: CharacterId,
        input: AcceptQuestInput,
    ) -> Result<AcceptQuestResult, CharacterError> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self
            .repo
            .get(character_id)
            .await?
            .ok_or_else(|| CharacterError::not_found(character_id))?;

        let quest = Quest::new(QuestName::new(input.name)?, self.clock.now())
            .with_description(Description::new(input.description)?)
            .with_reward(input.experience_reward);

        let accepted = character.accept_quest(quest)?;
        self.repo.save(&character).await?;

        tracing::info!(
            character_id = %character_id,
            quest_name = %accepted.quest_name,
            experience_reward = accepted.experience_reward,
            pending_quests = accepted.pending_quests,
            "Quest accepted"
        );

        Ok(AcceptQuestResult {
            character_name: character.name().to_string(),
            accepted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockCharacterRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use guildhall_domain::{Character, CharacterClass, CharacterName};

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap()))
    }

    fn aria(id: CharacterId) -> Character {
        Character::new(
            id,
            CharacterName::new("Aria").unwrap(),
            CharacterClass::Paladin,
            Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
        )
    }

    fn input(name: &str, reward: u64) -> AcceptQuestInput {
        AcceptQuestInput {
            name: name.to_string(),
            description: String::new(),
            experience_reward: reward,
        }
    }

    fn use_case(repo: MockCharacterRepo) -> AcceptQuest {
        AcceptQuest::new(Arc::new(repo), clock(), Arc::new(CharacterLocks::new()))
    }

    #[tokio::test]
    async fn when_character_not_found_returns_error() {
        let id = CharacterId::from_i64(99);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .withf(move |got| *got == id)
            .returning(|_| Ok(None));

        let result = use_case(repo).execute(id, input("Dragon", 50)).await;

        assert!(matches!(result, Err(CharacterError::NotFound(_))));
    }

    #[tokio::test]
    async fn when_quest_name_blank_returns_validation() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |_| Ok(Some(aria(id))));

        let result = use_case(repo).execute(id, input("  ", 50)).await;

        assert!(matches!(result, Err(CharacterError::Validation(_))));
    }

    #[tokio::test]
    async fn when_reward_above_cap_returns_validation_and_saves_nothing() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |_| Ok(Some(aria(id))));
        repo.expect_save().never();

        let result = use_case(repo)
            .execute(id, input("Hoard", i64::MAX as u64 + 1))
            .await;

        assert!(matches!(result, Err(CharacterError::Validation(_))));
    }

    #[tokio::test]
    async fn when_same_name_in_other_case_returns_conflict() {
        let id = CharacterId::from_i64(1);
        let mut held = aria(id);
        held.accept_quest(Quest::new(
            QuestName::new("Dragon").unwrap(),
            Utc.timestamp_opt(1_650_000_000, 0).unwrap(),
        ))
        .unwrap();

        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |_| Ok(Some(held.clone())));
        repo.expect_save().never();

        let result = use_case(repo).execute(id, input("dragon", 50)).await;

        assert!(matches!(result, Err(CharacterError::Conflict(_))));
    }

    #[tokio::test]
    async fn when_save_fails_returns_repo_error() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |_| Ok(Some(aria(id))));
        repo.expect_save()
            .returning(|_| Err(RepoError::database("save_character", "database is locked")));

        let result = use_case(repo).execute(id, input("Dragon", 50)).await;

        assert!(matches!(result, Err(CharacterError::Repo(_))));
    }

    #[tokio::test]
    async fn when_valid_appends_and_saves() {
        let id = CharacterId::from_i64(1);
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |_| Ok(Some(aria(id))));
        repo.expect_save()
            .withf(|character| {
                character.quests().len() == 1
                    && character.quests()[0].name().as_str() == "Dragon"
                    && character.quests()[0].experience_reward() == 250
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(repo)
            .execute(id, input("Dragon", 250))
            .await
            .expect("accept succeeds");

        assert_eq!(result.character_name, "Aria");
        assert_eq!(result.accepted.pending_quests, 1);
        assert_eq!(result.message(), "Quest 'Dragon' accepted by Aria");
    }
}
