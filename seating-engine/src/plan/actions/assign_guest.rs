//! AssignGuest command handler

use shared::seating::{AssignOutcome, EventPayload};

use crate::assignment;
use crate::core::{SeatingError, SeatingResult};
use crate::plan::traits::{CommandContext, CommandHandler};

/// AssignGuest action
#[derive(Debug, Clone)]
pub struct AssignGuestAction {
    pub guest_id: String,
    pub table_id: String,
}

impl AssignGuestAction {
    /// Apply the assignment and report the raw outcome.
    ///
    /// Only applied outcomes emit an event.
    pub fn run(&self, ctx: &mut CommandContext<'_>) -> AssignOutcome {
        let outcome = assignment::assign(ctx.tables, ctx.guests, &self.guest_id, &self.table_id);
        if outcome.is_applied() {
            ctx.emit(EventPayload::GuestAssigned {
                guest_id: self.guest_id.clone(),
                table_id: self.table_id.clone(),
                previous_table_id: outcome.previous_table().map(str::to_string),
            });
        }
        outcome
    }
}

impl CommandHandler for AssignGuestAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SeatingResult<()> {
        match self.run(ctx) {
            AssignOutcome::Assigned
            | AssignOutcome::AlreadySeatedElsewhere { .. }
            | AssignOutcome::AlreadyAtTable => Ok(()),
            AssignOutcome::TableFull => Err(SeatingError::TableFull(self.table_id.clone())),
            AssignOutcome::TableNotFound => {
                Err(SeatingError::TableNotFound(self.table_id.clone()))
            }
            AssignOutcome::GuestNotFound => {
                Err(SeatingError::GuestNotFound(self.guest_id.clone()))
            }
        }
    }
}
