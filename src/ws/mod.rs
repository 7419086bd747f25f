//! WebSocket transport layer: upgrade handling and per-connection loops.
//!
//! The endpoint at `/ws` is the relay's only client-facing surface. Each
//! accepted connection gets its own task running the read/write loop and
//! drives the broadcast engine's lifecycle hooks.

pub mod connection;
pub mod handler;
