//! Relay error types.
//!
//! None of these ever reach an end user as a visible failure: a
//! [`SendError`] degrades to "that one recipient missed a message", and a
//! [`DecodeError`] is rejected at the transport boundary before the engine
//! sees the frame. Duplicate registration and removal of an unknown session
//! are deliberately not errors at all; the registry models them as no-ops.

/// Delivery to a single recipient failed.
///
/// Caught inside the broadcast loop: logged, the recipient skipped, and
/// the broadcast continues to the remaining sessions. Never fatal, never
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The connection's writer task has gone away (socket closed or
    /// closing).
    #[error("session is closed")]
    Closed,

    /// The session's outbound queue is full; the client is too slow.
    #[error("session outbound queue is full")]
    QueueFull,

    /// The message could not be serialized to its wire form.
    #[error("failed to serialize message: {0}")]
    Serialize(String),
}

/// An inbound frame could not be decoded into a chat message.
///
/// Transport-boundary error: the connection loop logs and drops the frame,
/// so the broadcast engine has no handling path for it.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The frame was not valid JSON of the expected shape.
    #[error("malformed message payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
