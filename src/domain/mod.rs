//! Domain layer: session identity, the message wire model, and the
//! session registry.
//!
//! Everything the broadcast engine operates on lives here: session
//! identity and handles, the flat `{"type", "data"}` message shape with
//! its pure codec functions, and the concurrent registry of live sessions.

pub mod codec;
pub mod message;
pub mod session;
pub mod session_id;
pub mod session_registry;

pub use message::{ChatMessage, MessageKind};
pub use session::Session;
pub use session_id::SessionId;
pub use session_registry::SessionRegistry;
