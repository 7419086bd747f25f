//! Wire codec for [`ChatMessage`].
//!
//! Two pure functions over the flat JSON wire shape. The connection loop
//! calls [`decode`] on every inbound text frame before the engine sees it;
//! the broadcast loop calls [`encode`] once per broadcast so each recipient
//! receives the identical serialized frame.

use crate::error::{DecodeError, SendError};

use super::ChatMessage;

/// Decodes a raw inbound text frame into a [`ChatMessage`].
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if the text is not a JSON object of
/// the expected `{"type", "data"}` shape. Rejection happens at the
/// transport boundary; malformed frames never reach the broadcast engine.
pub fn decode(text: &str) -> Result<ChatMessage, DecodeError> {
    serde_json::from_str(text).map_err(DecodeError::Malformed)
}

/// Encodes a [`ChatMessage`] into its wire text form.
///
/// # Errors
///
/// Returns [`SendError::Serialize`] if serialization fails. With the
/// current message shape this cannot happen in practice, but the broadcast
/// loop treats it like any other delivery failure.
pub fn encode(message: &ChatMessage) -> Result<String, SendError> {
    serde_json::to_string(message).map_err(|err| SendError::Serialize(err.to_string()))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::MessageKind;

    #[test]
    fn decode_valid_text_frame() {
        let Ok(msg) = decode(r#"{"type":"text","data":"hi"}"#) else {
            panic!("expected frame to decode");
        };
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.data, "hi");
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"type":"text"}"#).is_err());
        assert!(decode(r#"{"type":"quote","data":"hi"}"#).is_err());
    }

    #[test]
    fn encode_produces_flat_wire_shape() {
        let Ok(json) = encode(&ChatMessage::text("hello")) else {
            panic!("expected message to encode");
        };
        assert_eq!(json, r#"{"type":"text","data":"hello"}"#);
    }

    #[test]
    fn wire_shape_round_trips() {
        let original = ChatMessage::connected_notice();
        let Ok(json) = encode(&original) else {
            panic!("expected message to encode");
        };
        let Ok(decoded) = decode(&json) else {
            panic!("expected frame to decode");
        };
        assert_eq!(decoded, original);
    }
}
