//! Create character use case.

use std::str::FromStr;
use std::sync::Arc;

use guildhall_domain::{Character, CharacterClass, CharacterName};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, RepoError};

use super::error::CharacterError;

/// Registers a new level 1 adventurer.
pub struct CreateCharacter {
    repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateCharacter {
    pub fn new(repo: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Validate the class and name, then insert the character.
    ///
    /// The class is checked first so an unknown class is reported even when
    /// the name is also bad. Uniqueness is enforced by the store, so two
    /// racing creates with the same name cannot both succeed.
    pub async fn execute(&self, name: &str, class: &str) -> Result<Character, CharacterError> {
        let class = CharacterClass::from_str(class)?;
        let name = CharacterName::new(name)?;

        let character = self
            .repo
            .create(&name, class, self.clock.now())
            .await
            .map_err(|err| match err {
                RepoError::ConstraintViolation(_) => {
                    CharacterError::Conflict(format!("A character named '{}' already exists", name))
                }
                other => other.into(),
            })?;

        tracing::info!(
            character_id = %character.id(),
            name = %character.name(),
            class = %character.class(),
            "Character created"
        );

        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockCharacterRepo, MockClockPort};
    use chrono::{TimeZone, Utc};
    use guildhall_domain::CharacterId;

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap()))
    }

    #[tokio::test]
    async fn when_class_unknown_returns_validation_without_touching_store() {
        let repo = MockCharacterRepo::new();
        let mut clock = MockClockPort::new();
        clock.expect_now().never();

        let use_case = CreateCharacter::new(Arc::new(repo), Arc::new(clock));
        let result = use_case.execute("Aria", "wizard").await;

        assert!(matches!(result, Err(CharacterError::Validation(_))));
    }

    #[tokio::test]
    async fn when_class_casing_differs_returns_validation() {
        let use_case = CreateCharacter::new(Arc::new(MockCharacterRepo::new()), clock());

        let result = use_case.execute("Aria", "paladin").await;

        assert!(matches!(result, Err(CharacterError::Validation(_))));
    }

    #[tokio::test]
    async fn when_name_blank_returns_validation() {
        let use_case = CreateCharacter::new(Arc::new(MockCharacterRepo::new()), clock());

        let result = use_case.execute("   ", "barbaro").await;

        assert!(matches!(result, Err(CharacterError::Validation(_))));
    }

    #[tokio::test]
    async fn when_name_taken_returns_conflict() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_create()
            .returning(|_, _, _| Err(RepoError::constraint("UNIQUE constraint failed")));

        let use_case = CreateCharacter::new(Arc::new(repo), clock());
        let result = use_case.execute("Aria", "Paladin").await;

        match result {
            Err(CharacterError::Conflict(msg)) => assert!(msg.contains("Aria")),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn when_store_fails_returns_repo_error() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_create()
            .returning(|_, _, _| Err(RepoError::database("create_character", "disk I/O error")));

        let use_case = CreateCharacter::new(Arc::new(repo), clock());
        let result = use_case.execute("Aria", "Paladin").await;

        assert!(matches!(result, Err(CharacterError::Repo(_))));
    }

    #[tokio::test]
    async fn when_valid_creates_trimmed_level_one_character() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut repo = MockCharacterRepo::new();
        repo.expect_create()
            .withf(move |name, class, created_at| {
                name.as_str() == "Aria"
                    && *class == CharacterClass::Sacerdote
                    && *created_at == now
            })
            .returning(|name, class, created_at| {
                Ok(Character::new(
                    CharacterId::from_i64(7),
                    name.clone(),
                    class,
                    created_at,
                ))
            });

        let use_case = CreateCharacter::new(Arc::new(repo), clock());
        let character = use_case
            .execute("  Aria  ", "sacerdote")
            .await
            .expect("create succeeds");

        assert_eq!(character.id(), CharacterId::from_i64(7));
        assert_eq!(character.level(), 1);
        assert_eq!(character.experience(), 0);
        assert!(character.quests().is_empty());
    }
}
