//! WebSocket event DTOs.
//!
//! Events are JSON objects tagged by `type`; the tag doubles as the
//! dispatch key in the socket handler.

use serde::{Deserialize, Serialize};

/// Events received from clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Relay `message` to the other members of the target room
    Message {
        message: String,
        #[serde(rename = "roomId")]
        room_id: String,
    },
    /// Join the named room, creating it on demand
    JoinRoom { room: String },
}

/// Events sent to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Sent once after the upgrade with the server-assigned identifier
    Connected { connection_id: String },
    /// A message relayed from another member of a shared room
    ReceivedMessage { message: String },
    /// The previous event from this client was malformed or invalid
    Error { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_event_wire_shape() {
        // given: payloads as clients send them
        let message = r#"{"type":"message","message":"hi","roomId":"lobby"}"#;
        let join = r#"{"type":"join-room","room":"lobby"}"#;

        // when:
        let message_event: ClientEvent = serde_json::from_str(message).unwrap();
        let join_event: ClientEvent = serde_json::from_str(join).unwrap();

        // then:
        assert!(matches!(
            message_event,
            ClientEvent::Message { ref message, ref room_id }
                if message.as_str() == "hi" && room_id.as_str() == "lobby"
        ));
        assert!(matches!(
            join_event,
            ClientEvent::JoinRoom { ref room } if room.as_str() == "lobby"
        ));
    }

    #[test]
    fn test_server_event_tags_are_kebab_case() {
        // given:
        let event = ServerEvent::ReceivedMessage {
            message: "hi".to_string(),
        };

        // when:
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        // then: room id is not echoed, only the text
        assert_eq!(json["type"], "received-message");
        assert_eq!(json["message"], "hi");
        assert!(json.get("roomId").is_none());
    }

    #[test]
    fn test_client_event_unknown_type_fails() {
        // given:
        let payload = r#"{"type":"self-destruct"}"#;

        // when:
        let result = serde_json::from_str::<ClientEvent>(payload);

        // then:
        assert!(result.is_err());
    }
}
