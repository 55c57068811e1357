//! Seating commands - requests to mutate the plan

use crate::models::{TableShape, TableUpdate};
use serde::{Deserialize, Serialize};

/// Seating command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingCommand {
    /// Command unique ID (echoed in the response and in emitted events)
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: SeatingCommandPayload,
}

impl SeatingCommand {
    pub fn new(payload: SeatingCommandPayload) -> Self {
        Self {
            command_id: crate::util::new_id(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatingCommandPayload {
    // ========== Tables ==========
    CreateTable {
        shape: TableShape,
    },
    UpdateTable {
        table_id: String,
        patch: TableUpdate,
    },
    MoveTable {
        table_id: String,
        x: f64,
        y: f64,
    },
    DeleteTable {
        table_id: String,
    },

    // ========== Assignment ==========
    AssignGuest {
        guest_id: String,
        table_id: String,
    },
    UnassignGuest {
        guest_id: String,
        table_id: String,
    },
}
