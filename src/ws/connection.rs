//! WebSocket connection read/write loop.
//!
//! One task per connection: inbound text frames are decoded and handed to
//! the broadcast engine, and frames queued on the session's outbound
//! channel are written to the socket. The loop exiting, for any reason,
//! triggers the disconnect hook exactly once.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use crate::domain::{Session, SessionId, codec};
use crate::service::BroadcastEngine;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Assigns the session its identifier and registers it with the engine
///   (which broadcasts the join notice).
/// - Reads client frames, decodes them, and relays via the engine;
///   undecodable frames are logged and dropped here, never reaching the
///   engine.
/// - Drains the session's outbound queue into the socket.
pub async fn run_connection(
    socket: WebSocket,
    engine: Arc<BroadcastEngine>,
    queue_capacity: usize,
) {
    let session_id = SessionId::new();
    let (session, mut outbound_rx) = Session::channel(session_id, queue_capacity);
    let (mut ws_tx, mut ws_rx) = socket.split();

    engine.on_connect(session.clone()).await;

    loop {
        tokio::select! {
            // Incoming frame from the client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        handle_text_frame(text.as_str(), &engine, &session).await;
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
            // Outbound frame queued by a broadcast
            frame = outbound_rx.recv() => {
                match frame {
                    Some(frame) => {
                        if ws_tx.send(Message::text(frame)).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    engine.on_disconnect(session_id).await;
    tracing::debug!(%session_id, "ws connection closed");
}

/// Decodes one inbound text frame and relays it through the engine.
///
/// Malformed frames are the transport layer's error: logged and dropped
/// without a reply, matching the engine's contract that it only ever sees
/// well-formed messages.
async fn handle_text_frame(text: &str, engine: &BroadcastEngine, session: &Session) {
    match codec::decode(text) {
        Ok(message) => engine.on_message(&message, session).await,
        Err(err) => {
            tracing::warn!(session_id = %session.id(), %err, "rejected undecodable frame");
        }
    }
}
