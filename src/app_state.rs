//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::service::BroadcastEngine;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Broadcast engine driving the session lifecycle.
    pub engine: Arc<BroadcastEngine>,
    /// Relay configuration loaded at startup.
    pub config: RelayConfig,
}
