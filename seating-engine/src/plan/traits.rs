//! Command handler trait and execution context

use enum_dispatch::enum_dispatch;
use shared::seating::{EventPayload, SeatingEvent};

use crate::core::SeatingResult;
use crate::guests::GuestDirectory;
use crate::registry::TableRegistry;

/// Mutable view of the plan handed to one action.
///
/// Actions mutate tables/guests through it and record the resulting events;
/// the plan stamps sequence numbers and delivers them after the action ends.
pub struct CommandContext<'a> {
    pub tables: &'a mut TableRegistry,
    pub guests: &'a mut dyn GuestDirectory,
    events: Vec<EventPayload>,
    created_table_id: Option<String>,
}

impl<'a> CommandContext<'a> {
    pub fn new(tables: &'a mut TableRegistry, guests: &'a mut dyn GuestDirectory) -> Self {
        Self {
            tables,
            guests,
            events: Vec::new(),
            created_table_id: None,
        }
    }

    pub fn emit(&mut self, payload: EventPayload) {
        self.events.push(payload);
    }

    pub fn set_created_table(&mut self, table_id: String) {
        self.created_table_id = Some(table_id);
    }

    pub(crate) fn finish(self) -> (Vec<EventPayload>, Option<String>) {
        (self.events, self.created_table_id)
    }
}

/// One command, executed synchronously against the context.
///
/// Rejections are returned as errors and must leave the context untouched.
#[enum_dispatch]
pub trait CommandHandler {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SeatingResult<()>;
}

/// Stamp payloads with consecutive sequence numbers starting at `*sequence`
pub(crate) fn stamp_events(
    payloads: Vec<EventPayload>,
    command_id: Option<&str>,
    sequence: &mut u64,
) -> Vec<SeatingEvent> {
    payloads
        .into_iter()
        .map(|payload| {
            let event = SeatingEvent::new(*sequence, command_id.map(str::to_string), payload);
            *sequence += 1;
            event
        })
        .collect()
}
