//! Command-line argument parsing.

use clap::{Parser, Subcommand};

use guildhall_shared::{DEFAULT_QUEST_REWARD, MAX_QUEST_REWARD};

use crate::client::DEFAULT_API_URL;

/// Guildhall - adventurer and quest tracker
#[derive(Debug, Parser)]
#[command(name = "guildhall")]
#[command(about = "Guildhall - track adventurers, their quests and their levels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine base URL
    #[arg(long, global = true, env = "GUILDHALL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands. Characters are addressed by name.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new adventurer
    Create {
        name: String,
        /// One of: Paladin, picaro, sacerdote, barbaro
        class: String,
    },

    /// Show an adventurer's level, experience and quests
    Show { name: String },

    /// Give an adventurer a new quest
    Accept {
        /// Adventurer name
        name: String,
        /// Quest name
        quest: String,
        #[arg(long, short, default_value = "")]
        description: String,
        /// Experience reward
        #[arg(
            long,
            default_value_t = DEFAULT_QUEST_REWARD,
            value_parser = clap::value_parser!(u64).range(..=MAX_QUEST_REWARD)
        )]
        xp: u64,
    },

    /// Complete the adventurer's oldest quest
    Complete { name: String },

    /// List the adventurer's quests, oldest first
    Quests { name: String },
}
