//! Conversation types: turns, roles, status, and turn log events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a turn author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    System,
    User,
    Assistant,
}

/// One user or assistant message in the chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub id: Uuid,
    pub role: TurnRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a turn with a fresh identifier and the current timestamp.
    pub fn new(role: TurnRole, content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Whether a turn is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Idle,
    Processing,
}

/// Change notification emitted as the turn log evolves.
///
/// `Appended` carries a whole new turn; `Revised` carries the full replacement
/// content of an existing turn after an incremental update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TurnEvent {
    Appended { turn: Turn },
    Revised { id: Uuid, content: String },
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_new_assigns_unique_ids() {
        let a = Turn::new(TurnRole::User, "first");
        let b = Turn::new(TurnRole::User, "second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_turn_serializes_camel_case() {
        let turn = Turn::new(TurnRole::Assistant, "hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hello");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_turn_timestamp_is_rfc3339_string() {
        let turn = Turn::new(TurnRole::User, "when");
        let json = serde_json::to_value(&turn).unwrap();
        let raw = json["createdAt"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(raw).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), turn.created_at);
    }

    #[test]
    fn test_turn_role_wire_names() {
        assert_eq!(serde_json::to_string(&TurnRole::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&TurnRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&TurnRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_chat_status_wire_names() {
        assert_eq!(serde_json::to_string(&ChatStatus::Idle).unwrap(), "\"idle\"");
        assert_eq!(
            serde_json::to_string(&ChatStatus::Processing).unwrap(),
            "\"processing\""
        );
    }

    #[test]
    fn test_turn_event_appended_wire_shape() {
        let turn = Turn::new(TurnRole::User, "hi");
        let event = TurnEvent::Appended { turn: turn.clone() };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "appended");
        assert_eq!(json["turn"]["content"], "hi");
    }

    #[test]
    fn test_turn_event_revised_wire_shape() {
        let id = Uuid::new_v4();
        let event = TurnEvent::Revised {
            id,
            content: "longer text".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "revised");
        assert_eq!(json["content"], "longer text");
        assert_eq!(json["id"], id.to_string());
    }

    #[test]
    fn test_turn_round_trip() {
        let turn = Turn::new(TurnRole::System, "persona text");
        let json = serde_json::to_string(&turn).unwrap();
        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(turn, back);
    }
}
