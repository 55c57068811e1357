//! DeleteTable command handler
//!
//! Unseats every occupant first so no guest keeps a back-reference to a
//! table that no longer exists.

use shared::seating::EventPayload;

use crate::assignment;
use crate::core::{SeatingError, SeatingResult};
use crate::plan::traits::{CommandContext, CommandHandler};

/// DeleteTable action
#[derive(Debug, Clone)]
pub struct DeleteTableAction {
    pub table_id: String,
}

impl CommandHandler for DeleteTableAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SeatingResult<()> {
        if !ctx.tables.contains(&self.table_id) {
            return Err(SeatingError::TableNotFound(self.table_id.clone()));
        }
        let unseated = assignment::clear_table(ctx.tables, ctx.guests, &self.table_id);
        ctx.tables.remove(&self.table_id);
        ctx.emit(EventPayload::TableDeleted {
            table_id: self.table_id.clone(),
            unseated_guest_ids: unseated,
        });
        Ok(())
    }
}
