//! DragController - pointer-driven table repositioning
//!
//! Pointer moves only touch a transient slot inside the controller; the
//! registry is written once, on release. Click and drag are two outcomes of
//! the same gesture, told apart at release by the threshold flag.

mod state;

pub use state::{DragPreview, DragRelease, DragState};

use crate::core::config::DEFAULT_DRAG_THRESHOLD;
use crate::core::{SeatingError, SeatingResult};
use crate::registry::TableRegistry;
use shared::models::Point;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    threshold: f64,
    /// Guest selected for manual placement; excludes table drags
    armed_guest: Option<String>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl DragController {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: DragState::Idle,
            threshold,
            armed_guest: None,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    // ========== Manual placement ==========

    pub fn armed_guest(&self) -> Option<&str> {
        self.armed_guest.as_deref()
    }

    /// Select a guest for click-to-place. Not allowed mid-gesture.
    pub fn arm_guest(&mut self, guest_id: impl Into<String>) -> SeatingResult<()> {
        if let Some(table_id) = self.state.table_id() {
            return Err(SeatingError::GestureInProgress(table_id.to_string()));
        }
        let guest_id = guest_id.into();
        debug!(guest_id = %guest_id, "Guest armed for placement");
        self.armed_guest = Some(guest_id);
        Ok(())
    }

    pub fn disarm(&mut self) -> Option<String> {
        self.armed_guest.take()
    }

    // ========== Pointer events ==========

    /// Press on a table: `Idle → PendingDrag`.
    ///
    /// Rejected without state change while a guest is armed, while another
    /// gesture is active, or when the table does not exist.
    pub fn pointer_down(
        &mut self,
        tables: &TableRegistry,
        table_id: &str,
        pointer: Point,
    ) -> SeatingResult<()> {
        if let Some(guest_id) = &self.armed_guest {
            return Err(SeatingError::GuestArmed(guest_id.clone()));
        }
        if let Some(active) = self.state.table_id() {
            return Err(SeatingError::GestureInProgress(active.to_string()));
        }
        let Some(table) = tables.get(table_id) else {
            warn!(table_id, "Drag start skipped: table not found");
            return Err(SeatingError::TableNotFound(table_id.to_string()));
        };

        let cursor_offset = pointer - table.position();
        self.state = DragState::PendingDrag {
            table_id: table_id.to_string(),
            pointer_down: pointer,
            cursor_offset,
        };
        trace!(table_id, x = pointer.x, y = pointer.y, "Pointer down");
        Ok(())
    }

    /// Hot path: geometry plus one cached write. Never touches the registry.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<DragPreview> {
        let threshold = self.threshold;
        match &mut self.state {
            DragState::Idle => None,
            DragState::PendingDrag {
                table_id,
                pointer_down,
                cursor_offset,
            } => {
                let table_id = std::mem::take(table_id);
                let (pointer_down, cursor_offset) = (*pointer_down, *cursor_offset);
                let position = pointer - cursor_offset;
                self.state = DragState::Dragging {
                    table_id: table_id.clone(),
                    pointer_down,
                    cursor_offset,
                    last_known: position,
                    moved_beyond_threshold: pointer.exceeds(pointer_down, threshold),
                };
                Some(DragPreview { table_id, position })
            }
            DragState::Dragging {
                table_id,
                pointer_down,
                cursor_offset,
                last_known,
                moved_beyond_threshold,
            } => {
                *last_known = pointer - *cursor_offset;
                *moved_beyond_threshold |= pointer.exceeds(*pointer_down, threshold);
                trace!(table_id = %table_id, x = last_known.x, y = last_known.y, "Drag move");
                Some(DragPreview {
                    table_id: table_id.clone(),
                    position: *last_known,
                })
            }
        }
    }

    /// Release: commit the cached position once, or report a click
    pub fn pointer_up(&mut self, tables: &mut TableRegistry) -> DragRelease {
        self.release(tables)
    }

    /// Leaving the canvas ends the gesture exactly like a release. The
    /// leave coordinate is never committed.
    pub fn pointer_leave(&mut self, tables: &mut TableRegistry) -> DragRelease {
        self.release(tables)
    }

    /// Abandon the gesture without committing
    pub fn cancel(&mut self) -> DragRelease {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DragRelease::Ignored,
            DragState::PendingDrag { table_id, .. } | DragState::Dragging { table_id, .. } => {
                debug!(table_id = %table_id, "Drag cancelled");
                DragRelease::Cancelled { table_id }
            }
        }
    }

    /// Transient position of `table_id`, only while it is being dragged
    pub fn preview_position(&self, table_id: &str) -> Option<Point> {
        match &self.state {
            DragState::Dragging {
                table_id: dragged,
                last_known,
                ..
            } if dragged == table_id => Some(*last_known),
            _ => None,
        }
    }

    /// Only `pointer_move` feeds the threshold flag and the cached slot;
    /// a press released without any move is always a click.
    fn release(&mut self, tables: &mut TableRegistry) -> DragRelease {
        let (table_id, position) = match std::mem::take(&mut self.state) {
            DragState::Idle => return DragRelease::Ignored,
            DragState::PendingDrag { table_id, .. }
            | DragState::Dragging {
                table_id,
                moved_beyond_threshold: false,
                ..
            } => {
                debug!(table_id = %table_id, "Gesture resolved as click");
                return DragRelease::Click { table_id };
            }
            DragState::Dragging {
                table_id,
                last_known,
                ..
            } => (table_id, last_known),
        };

        match tables.move_to(&table_id, position.x, position.y) {
            Ok(()) => {
                info!(table_id = %table_id, x = position.x, y = position.y, "Table position committed");
                DragRelease::Moved { table_id, position }
            }
            Err(e) => {
                warn!(table_id = %table_id, error = %e, "Drag commit skipped");
                DragRelease::Ignored
            }
        }
    }
}
