//! UpdateTable command handler
//!
//! Saves table settings. Capacity may drop below occupancy; the plan's
//! conflict pass flags it afterwards.

use shared::models::TableUpdate;
use shared::seating::EventPayload;

use crate::conflicts;
use crate::core::{SeatingError, SeatingResult};
use crate::plan::traits::{CommandContext, CommandHandler};

/// UpdateTable action
#[derive(Debug, Clone)]
pub struct UpdateTableAction {
    pub table_id: String,
    pub patch: TableUpdate,
}

impl CommandHandler for UpdateTableAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SeatingResult<()> {
        ctx.tables.update(&self.table_id, &self.patch)?;
        conflicts::recompute(ctx.tables, &*ctx.guests);

        let table = ctx
            .tables
            .get(&self.table_id)
            .ok_or_else(|| SeatingError::TableNotFound(self.table_id.clone()))?;
        let payload = EventPayload::TableUpdated {
            table_id: table.id.clone(),
            name: table.name.clone(),
            capacity: table.capacity,
        };
        ctx.emit(payload);
        Ok(())
    }
}
