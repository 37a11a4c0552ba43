use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use server::api::{AppState, PlayerPage};
use server::http_server::run_http_server;
use server::{PlaybackStore, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if exists
    dotenv::dotenv().ok();

    // Initialize tracing, honouring RUST_LOG and defaulting to info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!("Serving video from {}", config.video_path.display());
    if !config.video_path.exists() {
        warn!(
            "Video file {} does not exist yet; the player page will report an error until it does",
            config.video_path.display()
        );
    }

    let page = match &config.template_path {
        Some(path) => {
            info!("Using player template {}", path.display());
            PlayerPage::from_template(path)?
        }
        None => PlayerPage::builtin(),
    };

    let state = AppState::new(PlaybackStore::new(), page, config.video_path.clone());

    let cancellation_token = CancellationToken::new();
    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received shutdown signal. Shutting down gracefully..."),
            Err(e) => {
                warn!("Failed to listen for shutdown signal: {}", e);
                return;
            }
        }
        shutdown_token.cancel();
    });

    run_http_server(&config.bind_addr(), state, cancellation_token).await?;

    info!("Server shut down successfully");
    Ok(())
}
