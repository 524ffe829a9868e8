//! Experience and leveling rules.
//!
//! A pure function of (level, experience, reward). Reaching a level costs
//! `100 * level` experience; any surplus carries into the next level, so a
//! large reward can cascade through several level-ups at once.

use serde::{Deserialize, Serialize};

/// Experience needed per level, multiplied by the current level.
pub const XP_PER_LEVEL: u64 = 100;

/// Experience required to advance from `level` to `level + 1`.
#[inline]
pub fn threshold(level: u32) -> u64 {
    XP_PER_LEVEL.saturating_mul(u64::from(level))
}

/// Result of applying an experience reward.
///
/// Invariant: `experience < threshold(level)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub experience: u64,
    pub levels_gained: u32,
}

/// Add `reward` to the current experience and level up while the pool
/// covers the current level's threshold.
///
/// # Example
///
/// ```
/// use guildhall_domain::progression::apply_experience;
///
/// let result = apply_experience(1, 90, 50);
/// assert_eq!(result.level, 2);
/// assert_eq!(result.experience, 40);
/// assert_eq!(result.levels_gained, 1);
/// ```
pub fn apply_experience(current_level: u32, current_experience: u64, reward: u64) -> Progression {
    let mut level = current_level;
    let mut experience = current_experience.saturating_add(reward);
    let mut levels_gained = 0u32;

    while experience >= threshold(level) && level < u32::MAX {
        experience -= threshold(level);
        level += 1;
        levels_gained += 1;
    }

    Progression {
        level,
        experience,
        levels_gained,
    }
}
