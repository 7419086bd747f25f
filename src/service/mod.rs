//! Service layer: the broadcast engine.

pub mod broadcast_engine;

pub use broadcast_engine::BroadcastEngine;
