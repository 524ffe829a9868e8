//! Character aggregate - an adventurer and the quests they hold
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: level and experience only change through
//!   [`Character::complete_next_quest`]
//! - **Newtypes**: `CharacterName`, `QuestName` are valid by construction
//! - **Events**: mutations return outcome structs instead of bare `()`

use chrono::{DateTime, Utc};

use crate::entities::{Quest, MAX_QUEST_REWARD};
use crate::error::DomainError;
use crate::events::{QuestAccepted, QuestCompleted};
use crate::progression::{apply_experience, threshold};
use crate::value_objects::{CharacterClass, CharacterName, QuestName};
use crate::CharacterId;

/// Level every adventurer starts at.
pub const STARTING_LEVEL: u32 = 1;

/// An adventurer registered with the guild.
///
/// # Invariants
///
/// - `level >= 1`
/// - `experience < threshold(level)` after every completed quest
/// - no two held quests share a case-insensitive name
/// - `quests` is ordered oldest-accepted first
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use guildhall_domain::{Character, CharacterClass, CharacterId, CharacterName};
///
/// let name = CharacterName::new("Aria").unwrap();
/// let character = Character::new(CharacterId::from_i64(1), name, CharacterClass::Paladin, Utc::now());
///
/// assert_eq!(character.level(), 1);
/// assert_eq!(character.experience(), 0);
/// assert!(character.quests().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    class: CharacterClass,
    level: u32,
    experience: u64,
    quests: Vec<Quest>,
    created_at: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a fresh level 1 character with no quests.
    ///
    /// The id comes from the store that registered the name.
    pub fn new(
        id: CharacterId,
        name: CharacterName,
        class: CharacterClass,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            class,
            level: STARTING_LEVEL,
            experience: 0,
            quests: Vec::new(),
            created_at,
        }
    }

    /// Reconstruct from stored data. `quests` must already be in acceptance order.
    pub fn from_parts(
        id: CharacterId,
        name: CharacterName,
        class: CharacterClass,
        level: u32,
        experience: u64,
        quests: Vec<Quest>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            class,
            level: level.max(STARTING_LEVEL),
            experience,
            quests,
            created_at,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Experience still needed to reach the next level.
    pub fn experience_to_next_level(&self) -> u64 {
        threshold(self.level).saturating_sub(self.experience)
    }

    /// Held quests, oldest first.
    #[inline]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Find a held quest by case-insensitive name.
    pub fn find_quest(&self, name: &QuestName) -> Option<&Quest> {
        self.quests.iter().find(|q| q.name().matches(name))
    }

    // =========================================================================
    // Mutations (return domain events)
    // =========================================================================

    /// Append a quest to the log.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if the reward exceeds [`MAX_QUEST_REWARD`].
    /// `DomainError::Conflict` if a quest with the same case-insensitive
    /// name is already held.
    pub fn accept_quest(&mut self, quest: Quest) -> Result<QuestAccepted, DomainError> {
        if quest.experience_reward() > MAX_QUEST_REWARD {
            return Err(DomainError::validation(format!(
                "Experience reward cannot exceed {MAX_QUEST_REWARD}"
            )));
        }

        if let Some(existing) = self.find_quest(quest.name()) {
            return Err(DomainError::conflict(format!(
                "{} has already accepted quest '{}'",
                self.name,
                existing.name()
            )));
        }

        let accepted = QuestAccepted {
            quest_name: quest.name().clone(),
            experience_reward: quest.experience_reward(),
            pending_quests: self.quests.len() + 1,
        };
        self.quests.push(quest);
        Ok(accepted)
    }

    /// Complete the oldest pending quest and apply its reward.
    ///
    /// The quest is removed from the log and the reward runs through
    /// [`apply_experience`], which may cascade several level-ups.
    ///
    /// # Errors
    ///
    /// `DomainError::EmptyState` if no quest is held.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Utc;
    /// use guildhall_domain::{Character, CharacterClass, CharacterId, CharacterName, Quest, QuestName};
    ///
    /// let mut character = Character::new(
    ///     CharacterId::from_i64(1),
    ///     CharacterName::new("Brom").unwrap(),
    ///     CharacterClass::Barbaro,
    ///     Utc::now(),
    /// );
    /// let quest = Quest::new(QuestName::new("Dragon").unwrap(), Utc::now()).with_reward(250);
    /// character.accept_quest(quest).unwrap();
    ///
    /// let outcome = character.complete_next_quest().unwrap();
    /// assert_eq!(outcome.levels_gained, 1);
    /// assert_eq!(character.level(), 2);
    /// assert_eq!(character.experience(), 150);
    /// assert!(character.quests().is_empty());
    /// ```
    pub fn complete_next_quest(&mut self) -> Result<QuestCompleted, DomainError> {
        if self.quests.is_empty() {
            return Err(DomainError::empty_state(format!(
                "{} has no quests to complete",
                self.name
            )));
        }

        let quest = self.quests.remove(0);
        let previous_level = self.level;
        let progression = apply_experience(self.level, self.experience, quest.experience_reward());
        self.level = progression.level;
        self.experience = progression.experience;

        Ok(QuestCompleted {
            experience_gained: quest.experience_reward(),
            levels_gained: progression.levels_gained,
            previous_level,
            new_level: progression.level,
            new_experience: progression.experience,
            quest,
        })
    }
}
