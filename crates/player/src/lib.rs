//! Guildhall Player.
//!
//! Thin client for the guild engine: a typed HTTP client, plain-text
//! rendering and the `guildhall` command line. All rules live in the engine.

pub mod cli;
pub mod client;
pub mod render;


pub use client::{ClientError, GuildClient, DEFAULT_API_URL};
