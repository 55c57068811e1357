//! Seating events - facts recorded after command processing

use crate::models::{Conflict, Table};
use serde::{Deserialize, Serialize};

/// Seating event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingEvent {
    /// Event unique ID
    pub event_id: String,
    /// Plan-wide sequence number, strictly increasing
    pub sequence: u64,
    /// Engine timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command that triggered this event, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    pub event_type: SeatingEventType,
    pub payload: EventPayload,
}

impl SeatingEvent {
    pub fn new(sequence: u64, command_id: Option<String>, payload: EventPayload) -> Self {
        Self {
            event_id: crate::util::new_id(),
            sequence,
            timestamp: crate::util::now_millis(),
            command_id,
            event_type: payload.event_type(),
            payload,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatingEventType {
    TableCreated,
    TableUpdated,
    TableMoved,
    TableDeleted,
    GuestAssigned,
    GuestUnassigned,
    ConflictsChanged,
}

impl std::fmt::Display for SeatingEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatingEventType::TableCreated => write!(f, "TABLE_CREATED"),
            SeatingEventType::TableUpdated => write!(f, "TABLE_UPDATED"),
            SeatingEventType::TableMoved => write!(f, "TABLE_MOVED"),
            SeatingEventType::TableDeleted => write!(f, "TABLE_DELETED"),
            SeatingEventType::GuestAssigned => write!(f, "GUEST_ASSIGNED"),
            SeatingEventType::GuestUnassigned => write!(f, "GUEST_UNASSIGNED"),
            SeatingEventType::ConflictsChanged => write!(f, "CONFLICTS_CHANGED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    TableCreated {
        table: Table,
    },
    TableUpdated {
        table_id: String,
        name: String,
        capacity: u32,
    },
    TableMoved {
        table_id: String,
        x: f64,
        y: f64,
    },
    TableDeleted {
        table_id: String,
        /// Guests that were unseated along with the table
        unseated_guest_ids: Vec<String>,
    },
    GuestAssigned {
        guest_id: String,
        table_id: String,
        /// Table the guest was moved away from, in the same transition
        #[serde(skip_serializing_if = "Option::is_none")]
        previous_table_id: Option<String>,
    },
    GuestUnassigned {
        guest_id: String,
        table_id: String,
    },
    ConflictsChanged {
        table_id: String,
        conflicts: Vec<Conflict>,
    },
}

impl EventPayload {
    pub fn event_type(&self) -> SeatingEventType {
        match self {
            EventPayload::TableCreated { .. } => SeatingEventType::TableCreated,
            EventPayload::TableUpdated { .. } => SeatingEventType::TableUpdated,
            EventPayload::TableMoved { .. } => SeatingEventType::TableMoved,
            EventPayload::TableDeleted { .. } => SeatingEventType::TableDeleted,
            EventPayload::GuestAssigned { .. } => SeatingEventType::GuestAssigned,
            EventPayload::GuestUnassigned { .. } => SeatingEventType::GuestUnassigned,
            EventPayload::ConflictsChanged { .. } => SeatingEventType::ConflictsChanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_follows_payload() {
        let event = SeatingEvent::new(
            7,
            Some("cmd-1".to_string()),
            EventPayload::TableMoved {
                table_id: "t1".to_string(),
                x: 10.0,
                y: 20.0,
            },
        );
        assert_eq!(event.sequence, 7);
        assert_eq!(event.event_type, SeatingEventType::TableMoved);
        assert_eq!(event.event_type.to_string(), "TABLE_MOVED");
    }

    #[test]
    fn test_conflicts_changed_serializes_labels() {
        let payload = EventPayload::ConflictsChanged {
            table_id: "t1".to_string(),
            conflicts: vec![Conflict::OverCapacity, Conflict::FoodAllergy],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "CONFLICTS_CHANGED");
        assert_eq!(json["conflicts"][0], "Over capacity");
        assert_eq!(json["conflicts"][1], "Critical: Food Allergy at Table");
    }
}
