//! Guildhall Engine - Main entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guildhall_engine::api::http;
use guildhall_engine::infrastructure::{
    clock::SystemClock,
    config::{load_dotenv_from_repo_root, EngineConfig},
    sqlite::SqliteCharacterRepo,
};
use guildhall_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guildhall_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Guildhall Engine");

    let config = EngineConfig::from_env();

    tracing::info!(db_path = %config.db_path, "Opening character store");
    let repo = Arc::new(SqliteCharacterRepo::open(&config.db_path).await?);

    let app = Arc::new(App::new(repo.clone(), Arc::new(SystemClock::new())));

    let mut router = http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    match config.cors_layer() {
        Some(cors) => {
            tracing::info!(
                origins = config.cors_allowed_origins.as_deref().unwrap_or_default(),
                "CORS enabled"
            );
            router = router.layer(cors);
        }
        None => tracing::debug!("CORS_ALLOWED_ORIGINS not set, CORS disabled"),
    }

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repo.close().await;
    tracing::info!("Guildhall Engine stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
