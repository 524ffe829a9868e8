//! Character class value object.
//!
//! The guild recognises a fixed roster of classes. Their wire spellings are
//! kept exactly as clients send them: `Paladin` is capitalised, the rest are
//! lowercase. Matching is case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Adventurer class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    #[serde(rename = "Paladin")]
    Paladin,
    #[serde(rename = "picaro")]
    Picaro,
    #[serde(rename = "sacerdote")]
    Sacerdote,
    #[serde(rename = "barbaro")]
    Barbaro,
}

impl CharacterClass {
    /// Every class, in the order clients list them.
    pub const ALL: [CharacterClass; 4] = [
        Self::Paladin,
        Self::Picaro,
        Self::Sacerdote,
        Self::Barbaro,
    ];

    /// Returns the wire spelling (e.g. "Paladin", "picaro").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paladin => "Paladin",
            Self::Picaro => "picaro",
            Self::Sacerdote => "sacerdote",
            Self::Barbaro => "barbaro",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                DomainError::validation(format!(
                    "Unknown class: {s} (expected one of {})",
                    allowed.join(", ")
                ))
            })
    }
}
