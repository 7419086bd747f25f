//! Connected-session handle.
//!
//! A [`Session`] pairs a [`SessionId`] with the send capability for that
//! connection: the sending half of a bounded frame queue whose receiving
//! half is owned by the connection's writer task. The handle is cheap to
//! clone, which is what lets the registry hand out snapshots while the
//! transport layer keeps its own copy and owns teardown.

use tokio::sync::mpsc;

use crate::error::SendError;

use super::SessionId;

/// Handle to one connected client.
///
/// The registry stores these for broadcast targeting; the actual socket
/// I/O lives in the transport layer. Dropping the queue receiver (the
/// connection's writer task exiting) turns every subsequent [`Session::send`]
/// into [`SendError::Closed`].
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    outbound: mpsc::Sender<String>,
}

impl Session {
    /// Creates a session handle and the receiving half of its frame queue.
    ///
    /// The transport layer calls this once per accepted connection and
    /// drains the returned receiver into the socket. `capacity` bounds the
    /// queue so a stalled consumer fails fast instead of buffering without
    /// limit.
    #[must_use]
    pub fn channel(id: SessionId, capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (outbound, rx) = mpsc::channel(capacity);
        (Self { id, outbound }, rx)
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Queues one wire frame for delivery to this session.
    ///
    /// Never blocks and never holds any lock: the frame is handed to the
    /// connection's writer task via `try_send`.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Closed`] if the connection's writer task has
    /// gone away, or [`SendError::QueueFull`] if the client is not keeping
    /// up with its queue.
    pub fn send(&self, frame: String) -> Result<(), SendError> {
        self.outbound.try_send(frame).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => SendError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => SendError::Closed,
        })
    }
}
