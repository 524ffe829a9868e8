//! Response bodies for the guild's HTTP API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Character and quest state
// =============================================================================

/// Full state of a character, quests oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterState {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub level: u32,
    pub experience: u64,
    #[serde(default)]
    pub quests: Vec<QuestState>,
}

/// A held quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestState {
    pub name: String,
    pub description: String,
    pub experience_reward: u64,
    pub status: String,
}

/// Acknowledgement of a successful mutation that has no richer payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// Result of completing a character's oldest quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub message: String,
    pub quest_name: String,
    pub experience_gained: u64,
    pub levels_gained: u32,
    pub level: u32,
    pub experience: u64,
}

// =============================================================================
// Errors
// =============================================================================

/// Error classification shared by engine and player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input value outside its allowed set or shape
    Validation,
    /// Requested resource not found
    NotFound,
    /// Duplicate name
    Conflict,
    /// Operation needs state the resource does not have (no quests)
    EmptyState,
    /// Internal server error
    Internal,
    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

/// JSON body of every non-2xx response produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
