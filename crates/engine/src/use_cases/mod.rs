//! Use cases - user story orchestration.
//!
//! Each use case validates input, coordinates the domain model and persists
//! through the repository ports.

pub mod characters;

pub use characters::CharacterUseCases;
