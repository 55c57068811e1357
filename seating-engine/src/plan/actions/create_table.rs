//! CreateTable command handler

use shared::models::{Table, TableShape};
use shared::seating::EventPayload;

use crate::core::SeatingResult;
use crate::plan::traits::{CommandContext, CommandHandler};

/// CreateTable action
#[derive(Debug, Clone)]
pub struct CreateTableAction {
    pub shape: TableShape,
}

impl CreateTableAction {
    pub fn run(&self, ctx: &mut CommandContext<'_>) -> Table {
        let table = ctx.tables.create(self.shape);
        ctx.set_created_table(table.id.clone());
        ctx.emit(EventPayload::TableCreated {
            table: table.clone(),
        });
        table
    }
}

impl CommandHandler for CreateTableAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SeatingResult<()> {
        self.run(ctx);
        Ok(())
    }
}
