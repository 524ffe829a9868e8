//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character storage (SQLite today, swappable)
//! - Clock (for testing)

mod clock;
mod error;
mod repos;

pub use clock::ClockPort;
pub use error::RepoError;
pub use repos::CharacterRepo;

#[cfg(test)]
pub use clock::MockClockPort;
#[cfg(test)]
pub use repos::MockCharacterRepo;
