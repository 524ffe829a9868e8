//! Entities - owned by an aggregate root, with no identity of their own
//! outside it.

pub mod quest;

pub use quest::{Quest, QuestStatus, DEFAULT_QUEST_REWARD, MAX_QUEST_REWARD};
