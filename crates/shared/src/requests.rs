//! Request bodies for the guild's HTTP API.

use serde::{Deserialize, Serialize};

/// `POST /api/characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    /// Class spelling as enumerated ("Paladin", "picaro", "sacerdote", "barbaro").
    pub class: String,
}

/// `POST /api/characters/{id}/quests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptQuestRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to [`crate::DEFAULT_QUEST_REWARD`] when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_reward: Option<u64>,
}

impl AcceptQuestRequest {
    pub fn reward_or_default(&self) -> u64 {
        self.experience_reward
            .unwrap_or(crate::DEFAULT_QUEST_REWARD)
    }
}
