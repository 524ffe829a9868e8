//! Plain-text rendering of engine responses.

use std::fmt::Write;

use guildhall_shared::{CharacterState, CompletionSummary, QuestState};

/// XP needed per level, used to show progress towards the next level.
const XP_PER_LEVEL: u64 = 100;

pub fn character(state: &CharacterState) -> String {
    let next = XP_PER_LEVEL.saturating_mul(u64::from(state.level));
    let mut out = format!(
        "{} the {} (#{})\n  Level {}  XP {}/{}\n",
        state.name, state.class, state.id, state.level, state.experience, next
    );
    out.push_str(&quests(&state.quests));
    out
}

pub fn quests(quests: &[QuestState]) -> String {
    if quests.is_empty() {
        return "  No quests.\n".to_string();
    }

    let mut out = String::from("  Quests (oldest first):\n");
    for (index, quest) in quests.iter().enumerate() {
        let _ = write!(
            out,
            "  {}. {} [{}] {} XP",
            index + 1,
            quest.name,
            quest.status,
            quest.experience_reward
        );
        if !quest.description.is_empty() {
            let _ = write!(out, " - {}", quest.description);
        }
        out.push('\n');
    }
    out
}

pub fn completion(summary: &CompletionSummary) -> String {
    format!(
        "Completed '{}'. {}\n  Now level {} with {} XP.\n",
        summary.quest_name, summary.message, summary.level, summary.experience
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(name: &str, reward: u64, description: &str) -> QuestState {
        QuestState {
            name: name.to_string(),
            description: description.to_string(),
            experience_reward: reward,
            status: "Pending".to_string(),
        }
    }

    #[test]
    fn character_shows_progress_towards_next_level() {
        let state = CharacterState {
            id: 3,
            name: "Brom".to_string(),
            class: "barbaro".to_string(),
            level: 2,
            experience: 40,
            quests: vec![],
        };

        let text = character(&state);

        assert!(text.starts_with("Brom the barbaro (#3)\n"));
        assert!(text.contains("Level 2  XP 40/200"));
        assert!(text.contains("No quests."));
    }

    #[test]
    fn quests_are_numbered_in_order() {
        let text = quests(&[
            quest("Rats", 50, ""),
            quest("Dragon", 500, "Slay it"),
        ]);

        assert_eq!(
            text,
            "  Quests (oldest first):\n  1. Rats [Pending] 50 XP\n  2. Dragon [Pending] 500 XP - Slay it\n"
        );
    }

    #[test]
    fn completion_includes_new_level() {
        let summary = CompletionSummary {
            message: "Quest completed, gained 300 XP. Gained 2 level(s).".to_string(),
            quest_name: "Epic".to_string(),
            experience_gained: 300,
            levels_gained: 2,
            level: 3,
            experience: 0,
        };

        let text = completion(&summary);

        assert!(text.starts_with("Completed 'Epic'. Quest completed, gained 300 XP."));
        assert!(text.contains("Now level 3 with 0 XP."));
    }
}
