//! Chat message wire model.
//!
//! A [`ChatMessage`] is the only payload the relay moves around: a flat
//! `{"type": ..., "data": ...}` JSON object. Client messages arrive in this
//! shape from the decode step, and the engine synthesizes the same shape for
//! join/leave notices. Messages are immutable once constructed and are
//! serialized exactly once per broadcast.

use serde::{Deserialize, Serialize};

/// Data string of the notice broadcast when a session joins.
pub const CONNECTED_NOTICE: &str = "User has connected";

/// Data string of the notice broadcast when a session leaves.
pub const DISCONNECTED_NOTICE: &str = "User has disconnected";

/// Discriminator for chat message types.
///
/// System notices deliberately reuse [`MessageKind::Text`] so that clients
/// render them like any other chat line; the `join`/`leave` kinds exist for
/// clients that want to tag their own traffic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Ordinary chat text, including engine-synthesized notices.
    Text,
    /// Client-tagged join announcement.
    Join,
    /// Client-tagged leave announcement.
    Leave,
}

/// A single relayed message: a kind discriminator plus string content.
///
/// Delivered verbatim to every recipient of a broadcast; the engine never
/// transforms, filters, or validates the content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message type discriminator, `"type"` on the wire.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// String content of the message.
    pub data: String,
}

impl ChatMessage {
    /// Creates a text message with the given content.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Text,
            data: data.into(),
        }
    }

    /// The system notice broadcast after a session is registered.
    #[must_use]
    pub fn connected_notice() -> Self {
        Self::text(CONNECTED_NOTICE)
    }

    /// The system notice broadcast after a session is removed.
    #[must_use]
    pub fn disconnected_notice() -> Self {
        Self::text(DISCONNECTED_NOTICE)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_plain_text_on_the_wire() {
        let join = ChatMessage::connected_notice();
        assert_eq!(join.kind, MessageKind::Text);
        assert_eq!(join.data, CONNECTED_NOTICE);

        let leave = ChatMessage::disconnected_notice();
        assert_eq!(leave.kind, MessageKind::Text);
        assert_eq!(leave.data, DISCONNECTED_NOTICE);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&MessageKind::Join).ok();
        assert_eq!(json.as_deref(), Some("\"join\""));
    }
}
