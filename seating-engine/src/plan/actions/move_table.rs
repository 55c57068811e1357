//! MoveTable command handler

use shared::seating::EventPayload;

use crate::core::SeatingResult;
use crate::plan::traits::{CommandContext, CommandHandler};

/// MoveTable action
#[derive(Debug, Clone)]
pub struct MoveTableAction {
    pub table_id: String,
    pub x: f64,
    pub y: f64,
}

impl CommandHandler for MoveTableAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SeatingResult<()> {
        ctx.tables.move_to(&self.table_id, self.x, self.y)?;
        ctx.emit(EventPayload::TableMoved {
            table_id: self.table_id.clone(),
            x: self.x,
            y: self.y,
        });
        Ok(())
    }
}
