//! Quest-related domain events
//!
//! These types communicate what happened when a character's quest log was
//! modified, allowing callers to report it.

use crate::entities::Quest;
use crate::value_objects::QuestName;

/// Outcome of accepting a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestAccepted {
    pub quest_name: QuestName,
    pub experience_reward: u64,
    /// Number of quests held after acceptance.
    pub pending_quests: usize,
}

/// Outcome of completing the oldest pending quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCompleted {
    /// The quest that was removed from the log.
    pub quest: Quest,
    pub experience_gained: u64,
    pub levels_gained: u32,
    pub previous_level: u32,
    pub new_level: u32,
    pub new_experience: u64,
}

impl QuestCompleted {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }

    /// Human-readable summary, e.g. "Quest completed, gained 50 XP. Gained 1 level(s)."
    pub fn message(&self) -> String {
        let mut message = format!("Quest completed, gained {} XP.", self.experience_gained);
        if self.leveled_up() {
            message.push_str(&format!(" Gained {} level(s).", self.levels_gained));
        }
        message
    }
}
