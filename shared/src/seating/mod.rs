//! Seating command/event types
//!
//! - Commands: requests from the host UI to mutate the seating plan
//! - Events: facts recorded after a command was applied
//! - Outcomes: explicit results of assign/unassign instead of silent no-ops

pub mod command;
pub mod event;
pub mod types;

// Re-exports
pub use command::{SeatingCommand, SeatingCommandPayload};
pub use event::{EventPayload, SeatingEvent, SeatingEventType};
pub use types::*;
