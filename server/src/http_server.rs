use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::api::{page, playback, video, AppState};

/// Builds the router for the player page, the video stream and the playback API
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health_check))
        .route("/state", get(playback::get_state))
        .route("/command", post(playback::post_command))
        .merge(video::routes(&state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Binds `addr` and serves until `cancellation_token` is cancelled
pub async fn run_http_server(
    addr: &str,
    state: AppState,
    cancellation_token: CancellationToken,
) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP server to {}", addr))?;
    run_http_server_with_listener(listener, state, cancellation_token).await
}

/// Serves on an already bound listener
pub async fn run_http_server_with_listener(
    listener: TcpListener,
    state: AppState,
    cancellation_token: CancellationToken,
) -> Result<()> {
    let local_addr = listener.local_addr()?;
    let app = build_router(state);

    info!("HTTP server listening on {}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancellation_token.cancelled().await;
            info!("HTTP server received shutdown signal");
        })
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))
}

async fn health_check() -> &'static str {
    "OK"
}
