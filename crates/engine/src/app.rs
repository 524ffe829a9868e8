//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::CharacterUseCases;

/// Main application state.
///
/// Holds the use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub characters: CharacterUseCases,
}

impl App {
    /// Create a new App with the given store and clock.
    pub fn new(character_repo: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            use_cases: UseCases {
                characters: CharacterUseCases::from_repo(character_repo, clock),
            },
        }
    }
}
