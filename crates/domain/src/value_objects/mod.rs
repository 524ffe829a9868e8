//! Value objects - Immutable objects defined by their attributes

mod character_class;
mod names;

pub use character_class::CharacterClass;
pub use names::{CharacterName, Description, QuestName};
