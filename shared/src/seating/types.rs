//! Seating outcome and response types

use super::event::SeatingEvent;
use serde::{Deserialize, Serialize};

/// Result of an assign request
///
/// Replaces silent no-ops: callers can tell "request already satisfied"
/// apart from "constraint violated".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignOutcome {
    /// Guest was unseated and is now at the target table
    Assigned,
    /// Guest was seated at `previous` and has been moved to the target
    /// table in one transition
    AlreadySeatedElsewhere { previous: String },
    /// Guest already sits at the target table; nothing changed
    AlreadyAtTable,
    /// Target table has no free seat; nothing changed
    TableFull,
    /// Target table does not exist; nothing changed
    TableNotFound,
    /// Guest is unknown to the directory; nothing changed
    GuestNotFound,
}

impl AssignOutcome {
    /// Whether the plan was mutated
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            AssignOutcome::Assigned | AssignOutcome::AlreadySeatedElsewhere { .. }
        )
    }

    /// Whether the guest now sits at the requested table
    pub fn is_seated(&self) -> bool {
        self.is_applied() || matches!(self, AssignOutcome::AlreadyAtTable)
    }

    pub fn previous_table(&self) -> Option<&str> {
        match self {
            AssignOutcome::AlreadySeatedElsewhere { previous } => Some(previous),
            _ => None,
        }
    }
}

/// Result of an unassign request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnassignOutcome {
    Unassigned,
    /// Guest was not at that table; nothing changed
    NotSeated,
    TableNotFound,
}

impl UnassignOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, UnassignOutcome::Unassigned)
    }
}

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// New table ID (only for CreateTable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    /// Events emitted by the command, in sequence order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<SeatingEvent>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, table_id: Option<String>, events: Vec<SeatingEvent>) -> Self {
        Self {
            command_id,
            success: true,
            table_id,
            events,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            table_id: None,
            events: vec![],
            error: Some(error),
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    TableNotFound,
    TableFull,
    InvalidCapacity,
    GuestNotFound,
    GestureInProgress,
    GuestArmed,
    NoGuestArmed,
}
