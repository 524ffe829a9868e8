//! Guildhall Player - command-line entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guildhall_player::cli::{Cli, Commands};
use guildhall_player::{render, GuildClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guildhall_player=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = GuildClient::new(&cli.api_url)?;

    match cli.command {
        Commands::Create { name, class } => {
            let state = client.create_character(&name, &class).await?;
            println!("Created {}.", state.name);
            print!("{}", render::character(&state));
        }
        Commands::Show { name } => {
            let state = client.find_by_name(&name).await?;
            print!("{}", render::character(&state));
        }
        Commands::Accept {
            name,
            quest,
            description,
            xp,
        } => {
            let state = client.find_by_name(&name).await?;
            let confirmation = client
                .accept_quest(state.id, &quest, &description, Some(xp))
                .await?;
            println!("{}", confirmation.message);
        }
        Commands::Complete { name } => {
            let state = client.find_by_name(&name).await?;
            let summary = client.complete_quest(state.id).await?;
            print!("{}", render::completion(&summary));
        }
        Commands::Quests { name } => {
            let state = client.find_by_name(&name).await?;
            let quests = client.list_quests(state.id).await?;
            print!("{}", render::quests(&quests));
        }
    }

    Ok(())
}
