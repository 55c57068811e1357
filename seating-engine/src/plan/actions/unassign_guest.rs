//! UnassignGuest command handler

use shared::seating::{EventPayload, UnassignOutcome};

use crate::assignment;
use crate::core::{SeatingError, SeatingResult};
use crate::plan::traits::{CommandContext, CommandHandler};

/// UnassignGuest action
#[derive(Debug, Clone)]
pub struct UnassignGuestAction {
    pub guest_id: String,
    pub table_id: String,
}

impl UnassignGuestAction {
    pub fn run(&self, ctx: &mut CommandContext<'_>) -> UnassignOutcome {
        let outcome = assignment::unassign(ctx.tables, ctx.guests, &self.guest_id, &self.table_id);
        if outcome.is_applied() {
            ctx.emit(EventPayload::GuestUnassigned {
                guest_id: self.guest_id.clone(),
                table_id: self.table_id.clone(),
            });
        }
        outcome
    }
}

impl CommandHandler for UnassignGuestAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SeatingResult<()> {
        match self.run(ctx) {
            // Unseating someone who is not there is a no-op
            UnassignOutcome::Unassigned | UnassignOutcome::NotSeated => Ok(()),
            UnassignOutcome::TableNotFound => {
                Err(SeatingError::TableNotFound(self.table_id.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guests::{GuestBook, GuestDirectory};
    use crate::registry::TableRegistry;
    use shared::models::{Guest, TableShape};

    #[test]
    fn test_unassign_is_idempotent() {
        let mut tables = TableRegistry::default();
        let id = tables.create(TableShape::Round).id;
        let mut guests = GuestBook::new(vec![Guest::new("g1", "Ana", "Family")]);
        assignment::assign(&mut tables, &mut guests, "g1", &id);

        let mut ctx = CommandContext::new(&mut tables, &mut guests);
        let action = UnassignGuestAction {
            guest_id: "g1".into(),
            table_id: id.clone(),
        };
        assert_eq!(action.run(&mut ctx), UnassignOutcome::Unassigned);
        assert_eq!(action.run(&mut ctx), UnassignOutcome::NotSeated);
        assert!(action.execute(&mut ctx).is_ok());

        assert_eq!(ctx.finish().0.len(), 1);
        assert!(guests.guest("g1").unwrap().assigned_table_id.is_none());
    }
}
