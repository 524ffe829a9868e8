//! Guildhall Engine library.
//!
//! Server side of the adventurers' guild: characters, quests and the
//! experience rules that turn finished quests into levels.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the domain model
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
