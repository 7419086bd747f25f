//! Broadcast engine: the relay's three lifecycle entry points.
//!
//! The transport layer calls [`BroadcastEngine::on_connect`],
//! [`BroadcastEngine::on_message`], and [`BroadcastEngine::on_disconnect`]
//! from each connection's own task; all three are safe to call concurrently
//! without external synchronization. Every entry point funnels into one
//! broadcast loop: encode once, snapshot the registry, send to each member.

use std::sync::Arc;

use crate::domain::{ChatMessage, Session, SessionId, SessionRegistry, codec};

/// Fans messages out to every live session.
///
/// One instance lives for the process lifetime, owning a shared reference
/// to the [`SessionRegistry`]. The engine is domain-agnostic with respect
/// to payload semantics: client messages are relayed verbatim, with no
/// transformation or filtering.
///
/// A quirk inherited from the reference behavior, kept on purpose: a
/// connecting session is registered *before* the join notice is broadcast
/// and therefore receives its own "User has connected", while a departing
/// session is removed *before* the leave notice and never sees its own
/// "User has disconnected".
#[derive(Debug, Clone)]
pub struct BroadcastEngine {
    registry: Arc<SessionRegistry>,
}

impl BroadcastEngine {
    /// Creates a new engine over the given registry.
    #[must_use]
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Returns a reference to the inner [`SessionRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Registers a newly connected session and broadcasts the join notice.
    ///
    /// The broadcast targets the post-registration snapshot, so the new
    /// session receives its own join notice.
    pub async fn on_connect(&self, session: Session) {
        let session_id = session.id();
        self.registry.add(session).await;
        self.broadcast(&ChatMessage::connected_notice()).await;
        tracing::info!(%session_id, "session connected");
    }

    /// Relays an inbound client message to every live session.
    ///
    /// The sender is included: the snapshot is whatever the registry holds
    /// at call time, and the sender is normally a member of it.
    pub async fn on_message(&self, message: &ChatMessage, sender: &Session) {
        tracing::debug!(session_id = %sender.id(), kind = ?message.kind, "relaying message");
        self.broadcast(message).await;
    }

    /// Removes a departed session and broadcasts the leave notice.
    ///
    /// Removal happens first, so the post-removal snapshot excludes the
    /// departed session; only the remaining members are notified.
    pub async fn on_disconnect(&self, session_id: SessionId) {
        self.registry.remove(session_id).await;
        self.broadcast(&ChatMessage::disconnected_notice()).await;
        tracing::info!(%session_id, "session disconnected");
    }

    /// Delivers one message to every session in a registry snapshot.
    ///
    /// The message is encoded once and the identical frame queued for each
    /// recipient. A per-recipient failure is logged and skipped; one
    /// unreachable peer never blocks or cancels delivery to the rest.
    async fn broadcast(&self, message: &ChatMessage) {
        let frame = match codec::encode(message) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::error!(%err, "dropping broadcast, message failed to encode");
                return;
            }
        };

        let snapshot = self.registry.snapshot().await;
        for session in snapshot {
            if let Err(err) = session.send(frame.clone()) {
                tracing::warn!(session_id = %session.id(), %err, "skipping unreachable session");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::message::{CONNECTED_NOTICE, DISCONNECTED_NOTICE};
    use tokio::sync::mpsc;

    fn make_engine() -> BroadcastEngine {
        BroadcastEngine::new(Arc::new(SessionRegistry::new()))
    }

    fn make_session() -> (Session, mpsc::Receiver<String>) {
        Session::channel(SessionId::new(), 16)
    }

    fn recv_data(rx: &mut mpsc::Receiver<String>) -> String {
        let Ok(frame) = rx.try_recv() else {
            panic!("expected a queued frame");
        };
        let Ok(msg) = codec::decode(&frame) else {
            panic!("expected frame to decode");
        };
        msg.data
    }

    fn assert_no_frame(rx: &mut mpsc::Receiver<String>) {
        assert!(rx.try_recv().is_err(), "expected no queued frame");
    }

    #[tokio::test]
    async fn connect_registers_and_delivers_join_notice_to_self() {
        let engine = make_engine();
        let (session, mut rx) = make_session();
        let id = session.id();

        engine.on_connect(session).await;

        assert!(engine.registry().contains(id).await);
        assert_eq!(recv_data(&mut rx), CONNECTED_NOTICE);
    }

    #[tokio::test]
    async fn message_reaches_all_sessions_including_sender() {
        let engine = make_engine();
        let (alice, mut rx_alice) = make_session();
        let (bob, mut rx_bob) = make_session();
        engine.registry().add(alice.clone()).await;
        engine.registry().add(bob).await;

        engine.on_message(&ChatMessage::text("hi"), &alice).await;

        assert_eq!(recv_data(&mut rx_alice), "hi");
        assert_eq!(recv_data(&mut rx_bob), "hi");
    }

    #[tokio::test]
    async fn one_failed_recipient_does_not_stop_broadcast() {
        let engine = make_engine();
        let (alice, mut rx_alice) = make_session();
        let (broken, rx_broken) = make_session();
        let (carol, mut rx_carol) = make_session();
        engine.registry().add(alice.clone()).await;
        engine.registry().add(broken).await;
        engine.registry().add(carol).await;

        // Simulate a half-closed peer: its writer task is gone.
        drop(rx_broken);

        engine.on_message(&ChatMessage::text("still here"), &alice).await;

        assert_eq!(recv_data(&mut rx_alice), "still here");
        assert_eq!(recv_data(&mut rx_carol), "still here");
    }

    #[tokio::test]
    async fn disconnect_removes_before_leave_broadcast() {
        let engine = make_engine();
        let (alice, mut rx_alice) = make_session();
        let (bob, mut rx_bob) = make_session();
        let alice_id = alice.id();
        engine.registry().add(alice).await;
        engine.registry().add(bob).await;

        engine.on_disconnect(alice_id).await;

        assert!(!engine.registry().contains(alice_id).await);
        assert_eq!(recv_data(&mut rx_bob), DISCONNECTED_NOTICE);
        assert_no_frame(&mut rx_alice);
    }

    #[tokio::test]
    async fn duplicate_disconnect_is_harmless() {
        let engine = make_engine();
        let (alice, _rx) = make_session();
        let id = alice.id();
        engine.registry().add(alice).await;

        engine.on_disconnect(id).await;
        engine.on_disconnect(id).await;

        assert!(engine.registry().is_empty().await);
    }

    #[tokio::test]
    async fn two_client_conversation_trace() {
        let engine = make_engine();
        let (alice, mut rx_alice) = make_session();
        let (bob, mut rx_bob) = make_session();
        let alice_id = alice.id();

        // connect A: only A is present, A sees its own join notice.
        engine.on_connect(alice.clone()).await;
        assert_eq!(recv_data(&mut rx_alice), CONNECTED_NOTICE);

        // connect B: both receive B's join notice.
        engine.on_connect(bob).await;
        assert_eq!(recv_data(&mut rx_alice), CONNECTED_NOTICE);
        assert_eq!(recv_data(&mut rx_bob), CONNECTED_NOTICE);

        // A speaks: both receive the message verbatim.
        engine.on_message(&ChatMessage::text("hi"), &alice).await;
        assert_eq!(recv_data(&mut rx_alice), "hi");
        assert_eq!(recv_data(&mut rx_bob), "hi");

        // A leaves: only B is notified.
        engine.on_disconnect(alice_id).await;
        assert_eq!(recv_data(&mut rx_bob), DISCONNECTED_NOTICE);
        assert_no_frame(&mut rx_alice);
    }
}
