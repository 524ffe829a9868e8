//! Guildhall domain: adventurers, their quests, and the leveling rules.
//!
//! Pure types with no I/O. The engine crate persists and serves them.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod progression;
pub mod value_objects;

pub use aggregates::{Character, STARTING_LEVEL};
pub use entities::{Quest, QuestStatus, DEFAULT_QUEST_REWARD, MAX_QUEST_REWARD};
pub use error::DomainError;
pub use events::{QuestAccepted, QuestCompleted};
pub use ids::CharacterId;
pub use progression::{apply_experience, threshold, Progression, XP_PER_LEVEL};
pub use value_objects::{CharacterClass, CharacterName, Description, QuestName};
