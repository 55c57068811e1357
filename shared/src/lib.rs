//! Shared types for the seating engine
//!
//! Common types used by the engine and by host surfaces (canvas, preview,
//! export) including guest/table models, commands, events and error codes.

pub mod error;
pub mod models;
pub mod seating;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Conflict, Guest, Point, Table, TableShape, TableUpdate};
pub use seating::{
    AssignOutcome, CommandError, CommandErrorCode, CommandResponse, SeatingCommand,
    SeatingEvent, SeatingEventType, EventPayload, UnassignOutcome,
};
