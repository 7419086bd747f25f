//! chat-relay server entry point.
//!
//! Starts the Axum HTTP server with the WebSocket relay endpoint.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use chat_relay::app_state::AppState;
use chat_relay::build_router;
use chat_relay::config::RelayConfig;
use chat_relay::domain::SessionRegistry;
use chat_relay::service::BroadcastEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting chat-relay");

    // Build domain and service layers
    let registry = Arc::new(SessionRegistry::new());
    let engine = Arc::new(BroadcastEngine::new(registry));

    // Build application state and router
    let listen_addr = config.listen_addr;
    let app = build_router(AppState { engine, config });

    // Start server
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(addr = %listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
