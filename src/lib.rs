//! # chat-relay
//!
//! WebSocket chat relay: every message a client sends is rebroadcast to
//! all currently connected clients, join/leave notices included.
//!
//! The substantive logic is the session registry plus the broadcast
//! engine; the rest of the crate is the thin transport and bootstrap
//! surface around them.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket)
//!     │
//!     ├── WS Handler + Connection Loop (ws/)
//!     │
//!     ├── BroadcastEngine (service/)
//!     │
//!     ├── SessionRegistry, Session, ChatMessage (domain/)
//!     │
//!     └── Health endpoint (api/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::ws::handler::ws_handler;

/// Builds the complete application router: the `/ws` relay endpoint plus
/// the system routes.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
