//! Quest entity - a task held by exactly one character.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{Description, QuestName};

/// Reward granted when a quest is accepted without an explicit one.
pub const DEFAULT_QUEST_REWARD: u64 = 50;

/// Largest reward a quest may carry.
///
/// Keeps the level-up cascade short and every stored value inside SQLite's
/// signed 64-bit integers.
pub const MAX_QUEST_REWARD: u64 = 1_000_000_000;

/// Quest lifecycle state.
///
/// Completion removes a quest from its holder, so a stored quest is always
/// pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuestStatus {
    #[default]
    Pending,
}

impl QuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestStatus {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            other => Err(crate::DomainError::validation(format!(
                "Unknown quest status: {other}"
            ))),
        }
    }
}

/// A quest accepted by a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    name: QuestName,
    description: Description,
    experience_reward: u64,
    status: QuestStatus,
    accepted_at: DateTime<Utc>,
}

impl Quest {
    pub fn new(name: QuestName, accepted_at: DateTime<Utc>) -> Self {
        Self {
            name,
            description: Description::empty(),
            experience_reward: DEFAULT_QUEST_REWARD,
            status: QuestStatus::Pending,
            accepted_at,
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    pub fn with_reward(mut self, experience_reward: u64) -> Self {
        self.experience_reward = experience_reward;
        self
    }

    /// Reconstruct from stored data
    pub fn from_parts(
        name: QuestName,
        description: Description,
        experience_reward: u64,
        status: QuestStatus,
        accepted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            description,
            experience_reward,
            status,
            accepted_at,
        }
    }

    // Read-only accessors

    pub fn name(&self) -> &QuestName {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn experience_reward(&self) -> u64 {
        self.experience_reward
    }

    pub fn status(&self) -> QuestStatus {
        self.status
    }

    pub fn accepted_at(&self) -> DateTime<Utc> {
        self.accepted_at
    }
}
