//! Guildhall Protocol - Shared types for Engine and Player communication
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde, serde_json, and the domain crate
//!    for shared constants
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain types in DTOs** - raw integers and strings; conversion
//!    from domain types happens in the engine's HTTP layer

pub mod requests;
pub mod responses;

pub use requests::{AcceptQuestRequest, CreateCharacterRequest};
pub use responses::{
    CharacterState, CompletionSummary, Confirmation, ErrorBody, ErrorCode, QuestState,
};

pub use guildhall_domain::{DEFAULT_QUEST_REWARD, MAX_QUEST_REWARD};
