//! Command actions
//!
//! One file per command. `CommandAction` dispatches to the matching
//! handler through `enum_dispatch`.

mod assign_guest;
mod create_table;
mod delete_table;
mod move_table;
mod unassign_guest;
mod update_table;

pub use assign_guest::AssignGuestAction;
pub use create_table::CreateTableAction;
pub use delete_table::DeleteTableAction;
pub use move_table::MoveTableAction;
pub use unassign_guest::UnassignGuestAction;
pub use update_table::UpdateTableAction;

use enum_dispatch::enum_dispatch;
use shared::seating::SeatingCommandPayload;

use crate::core::SeatingResult;
use crate::plan::traits::{CommandContext, CommandHandler};

/// CommandAction enum - dispatches to concrete action implementations
#[enum_dispatch(CommandHandler)]
#[derive(Debug, Clone)]
pub enum CommandAction {
    CreateTable(CreateTableAction),
    UpdateTable(UpdateTableAction),
    MoveTable(MoveTableAction),
    DeleteTable(DeleteTableAction),
    AssignGuest(AssignGuestAction),
    UnassignGuest(UnassignGuestAction),
}

impl From<&SeatingCommandPayload> for CommandAction {
    fn from(payload: &SeatingCommandPayload) -> Self {
        match payload {
            SeatingCommandPayload::CreateTable { shape } => {
                CreateTableAction { shape: *shape }.into()
            }
            SeatingCommandPayload::UpdateTable { table_id, patch } => UpdateTableAction {
                table_id: table_id.clone(),
                patch: patch.clone(),
            }
            .into(),
            SeatingCommandPayload::MoveTable { table_id, x, y } => MoveTableAction {
                table_id: table_id.clone(),
                x: *x,
                y: *y,
            }
            .into(),
            SeatingCommandPayload::DeleteTable { table_id } => DeleteTableAction {
                table_id: table_id.clone(),
            }
            .into(),
            SeatingCommandPayload::AssignGuest { guest_id, table_id } => AssignGuestAction {
                guest_id: guest_id.clone(),
                table_id: table_id.clone(),
            }
            .into(),
            SeatingCommandPayload::UnassignGuest { guest_id, table_id } => UnassignGuestAction {
                guest_id: guest_id.clone(),
                table_id: table_id.clone(),
            }
            .into(),
        }
    }
}
