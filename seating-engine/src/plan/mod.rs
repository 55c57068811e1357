//! SeatingPlan - command facade over the seating core
//!
//! Owns the table registry, the guest directory, the drag controller and the
//! plan-wide event sequence. Every mutation runs as one transaction:
//!
//! ```text
//! transact(command_id, f)
//!     ├─ 1. Snapshot conflict lists
//!     ├─ 2. Run the action against a CommandContext
//!     ├─ 3. Diff conflict lists → ConflictsChanged events
//!     ├─ 4. Stamp sequence numbers
//!     └─ 5. Notify listeners
//! ```
//!
//! Pointer moves bypass all of this: they only update the drag preview.

pub mod traits;
pub mod actions;
pub mod handle;

pub use handle::SharedSeatingPlan;

use std::collections::HashMap;

use actions::{
    AssignGuestAction, CommandAction, CreateTableAction, DeleteTableAction, MoveTableAction,
    UnassignGuestAction, UpdateTableAction,
};
use shared::models::{Conflict, Point, Table, TableShape, TableUpdate};
use shared::seating::{
    AssignOutcome, CommandResponse, EventPayload, SeatingCommand, SeatingEvent, UnassignOutcome,
};
use tracing::debug;
use traits::{CommandContext, CommandHandler, stamp_events};

use crate::assignment;
use crate::conflicts;
use crate::core::{Config, SeatingError, SeatingResult};
use crate::drag::{DragController, DragPreview, DragRelease, DragState};
use crate::geometry::{Seat, SeatLayout};
use crate::guests::{GuestBook, GuestDirectory};
use crate::preview::{Preview, PreviewMode, PreviewRenderer, PreviewStats};
use crate::registry::TableRegistry;

/// Callback invoked once per emitted event, in sequence order
pub type EventListener = Box<dyn FnMut(&SeatingEvent) + Send>;

pub struct SeatingPlan<G: GuestDirectory = GuestBook> {
    tables: TableRegistry,
    guests: G,
    drag: DragController,
    layout: SeatLayout,
    renderer: PreviewRenderer,
    /// Sequence number of the next event
    next_sequence: u64,
    listeners: Vec<EventListener>,
}

impl<G: GuestDirectory> std::fmt::Debug for SeatingPlan<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingPlan")
            .field("tables", &self.tables.len())
            .field("drag", self.drag.state())
            .field("next_sequence", &self.next_sequence)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<G: GuestDirectory + Default> Default for SeatingPlan<G> {
    fn default() -> Self {
        Self::new(&Config::default(), G::default())
    }
}

impl<G: GuestDirectory> SeatingPlan<G> {
    pub fn new(config: &Config, guests: G) -> Self {
        Self {
            tables: TableRegistry::new(config),
            guests,
            drag: DragController::new(config.drag_threshold),
            layout: config.seat_layout,
            renderer: PreviewRenderer::new(config.seat_layout),
            next_sequence: 1,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for every subsequent event
    pub fn on_event(&mut self, listener: impl FnMut(&SeatingEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    pub fn table(&self, table_id: &str) -> Option<&Table> {
        self.tables.get(table_id)
    }

    pub fn guests(&self) -> &G {
        &self.guests
    }

    /// Sequence number the next event will carry
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    // ========== Commands ==========

    /// Execute a wire command and report its events
    pub fn execute_command(&mut self, cmd: SeatingCommand) -> CommandResponse {
        let action = CommandAction::from(&cmd.payload);
        debug!(command_id = %cmd.command_id, ?action, "Executing command");

        let (result, created, events) =
            self.transact(Some(&cmd.command_id), |ctx| action.execute(ctx));
        match result {
            Ok(()) => CommandResponse::success(cmd.command_id, created, events),
            Err(err) => {
                debug!(
                    command_id = %cmd.command_id,
                    code = %err.error_code(),
                    category = ?err.category(),
                    error = %err,
                    "Command rejected"
                );
                CommandResponse::error(cmd.command_id, err.into())
            }
        }
    }

    pub fn create_table(&mut self, shape: TableShape) -> Table {
        self.transact(None, |ctx| CreateTableAction { shape }.run(ctx)).0
    }

    pub fn update_table(&mut self, table_id: &str, patch: TableUpdate) -> SeatingResult<()> {
        let action = UpdateTableAction {
            table_id: table_id.to_string(),
            patch,
        };
        self.transact(None, |ctx| action.execute(ctx)).0
    }

    pub fn move_table(&mut self, table_id: &str, x: f64, y: f64) -> SeatingResult<()> {
        let action = MoveTableAction {
            table_id: table_id.to_string(),
            x,
            y,
        };
        self.transact(None, |ctx| action.execute(ctx)).0
    }

    /// Delete a table, unseating its occupants first
    pub fn delete_table(&mut self, table_id: &str) -> SeatingResult<()> {
        if self.drag.state().table_id() == Some(table_id) {
            self.drag.cancel();
        }
        let action = DeleteTableAction {
            table_id: table_id.to_string(),
        };
        self.transact(None, |ctx| action.execute(ctx)).0
    }

    pub fn assign_guest(&mut self, guest_id: &str, table_id: &str) -> AssignOutcome {
        let action = AssignGuestAction {
            guest_id: guest_id.to_string(),
            table_id: table_id.to_string(),
        };
        self.transact(None, |ctx| action.run(ctx)).0
    }

    pub fn unassign_guest(&mut self, guest_id: &str, table_id: &str) -> UnassignOutcome {
        let action = UnassignGuestAction {
            guest_id: guest_id.to_string(),
            table_id: table_id.to_string(),
        };
        self.transact(None, |ctx| action.run(ctx)).0
    }

    /// Full conflict pass over every table. Returns the ids whose lists changed.
    pub fn recompute(&mut self) -> Vec<String> {
        let (changed, _, _) =
            self.transact(None, |ctx| conflicts::recompute(ctx.tables, &*ctx.guests));
        changed
    }

    /// Edit guests in place (VIP flag, dietary notes...) and re-evaluate
    /// conflicts against the new data. Seating goes through `assign_guest`:
    /// back-references written by `f` are reset to match the tables.
    pub fn edit_guests<R>(&mut self, f: impl FnOnce(&mut G) -> R) -> R {
        let result = f(&mut self.guests);
        assignment::sync_back_references(&self.tables, &mut self.guests);
        self.recompute();
        result
    }

    // ========== Views ==========

    pub fn preview(&self, mode: PreviewMode) -> Preview {
        self.renderer.render(&self.tables, &self.guests, mode)
    }

    pub fn stats(&self) -> PreviewStats {
        PreviewStats::from_tables(self.tables.iter())
    }

    pub fn seats(&self, table_id: &str) -> Option<Vec<Seat>> {
        self.tables.get(table_id).map(|t| self.layout.seats(t))
    }

    /// Where the canvas should draw `table_id`: the drag preview while it is
    /// being dragged, otherwise the committed position
    pub fn display_position(&self, table_id: &str) -> Option<Point> {
        self.drag
            .preview_position(table_id)
            .or_else(|| self.tables.get(table_id).map(Table::position))
    }

    // ========== Pointer ==========

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn pointer_down(&mut self, table_id: &str, pointer: Point) -> SeatingResult<()> {
        self.drag.pointer_down(&self.tables, table_id, pointer)
    }

    pub fn pointer_move(&mut self, pointer: Point) -> Option<DragPreview> {
        self.drag.pointer_move(pointer)
    }

    pub fn pointer_up(&mut self) -> DragRelease {
        let release = self.drag.pointer_up(&mut self.tables);
        self.publish_release(&release);
        release
    }

    pub fn pointer_leave(&mut self) -> DragRelease {
        let release = self.drag.pointer_leave(&mut self.tables);
        self.publish_release(&release);
        release
    }

    pub fn cancel_drag(&mut self) -> DragRelease {
        self.drag.cancel()
    }

    // ========== Manual placement ==========

    pub fn armed_guest(&self) -> Option<&str> {
        self.drag.armed_guest()
    }

    pub fn arm_guest(&mut self, guest_id: &str) -> SeatingResult<()> {
        if !self.guests.contains(guest_id) {
            return Err(SeatingError::GuestNotFound(guest_id.to_string()));
        }
        self.drag.arm_guest(guest_id)
    }

    pub fn disarm_guest(&mut self) -> Option<String> {
        self.drag.disarm()
    }

    /// Seat the armed guest at `table_id`. The guest stays armed when the
    /// assignment is rejected so the host can try another table.
    pub fn place_armed_guest(&mut self, table_id: &str) -> SeatingResult<AssignOutcome> {
        let guest_id = self
            .drag
            .armed_guest()
            .map(str::to_string)
            .ok_or(SeatingError::NoGuestArmed)?;
        let outcome = self.assign_guest(&guest_id, table_id);
        if outcome.is_seated() {
            self.drag.disarm();
        }
        Ok(outcome)
    }

    // ========== Internals ==========

    fn transact<R>(
        &mut self,
        command_id: Option<&str>,
        f: impl FnOnce(&mut CommandContext<'_>) -> R,
    ) -> (R, Option<String>, Vec<SeatingEvent>) {
        let before = self.conflict_snapshot();

        let mut ctx = CommandContext::new(&mut self.tables, &mut self.guests);
        let result = f(&mut ctx);
        let (mut payloads, created) = ctx.finish();
        payloads.extend(self.conflict_changes(&before));

        let events = stamp_events(payloads, command_id, &mut self.next_sequence);
        self.notify(&events);
        (result, created, events)
    }

    fn conflict_snapshot(&self) -> HashMap<String, Vec<Conflict>> {
        self.tables
            .iter()
            .map(|t| (t.id.clone(), t.conflicts.clone()))
            .collect()
    }

    fn conflict_changes(&self, before: &HashMap<String, Vec<Conflict>>) -> Vec<EventPayload> {
        self.tables
            .iter()
            .filter(|t| {
                let previous = before.get(&t.id).map(Vec::as_slice).unwrap_or_default();
                previous != t.conflicts.as_slice()
            })
            .map(|t| EventPayload::ConflictsChanged {
                table_id: t.id.clone(),
                conflicts: t.conflicts.clone(),
            })
            .collect()
    }

    fn publish_release(&mut self, release: &DragRelease) {
        let DragRelease::Moved { table_id, position } = release else {
            return;
        };
        let payload = EventPayload::TableMoved {
            table_id: table_id.clone(),
            x: position.x,
            y: position.y,
        };
        let events = stamp_events(vec![payload], None, &mut self.next_sequence);
        self.notify(&events);
    }

    fn notify(&mut self, events: &[SeatingEvent]) {
        if events.is_empty() {
            return;
        }
        if self.listeners.is_empty() {
            debug!(count = events.len(), "No event listeners registered");
            return;
        }
        for event in events {
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }
}

#[cfg(test)]
mod tests;
