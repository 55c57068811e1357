//! Drag gesture state machine

use serde::Serialize;
use shared::models::Point;

/// Current table-move gesture.
///
/// ```text
/// Idle ──pointer_down──▶ PendingDrag ──pointer_move──▶ Dragging
///   ▲                        │                            │
///   └──── pointer_up / pointer_leave / cancel ────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    /// Pressed on a table, no movement seen yet
    PendingDrag {
        table_id: String,
        pointer_down: Point,
        /// `pointer_down - table_top_left`
        cursor_offset: Point,
    },
    /// At least one move seen; `last_known` is the transient top-left
    Dragging {
        table_id: String,
        pointer_down: Point,
        cursor_offset: Point,
        last_known: Point,
        /// Sticky once the pointer travelled past the click threshold
        moved_beyond_threshold: bool,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn table_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::PendingDrag { table_id, .. } | DragState::Dragging { table_id, .. } => {
                Some(table_id)
            }
        }
    }
}

/// Transient position the renderer paints while dragging
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragPreview {
    pub table_id: String,
    pub position: Point,
}

/// How a gesture ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragRelease {
    /// No gesture was active, or the commit target vanished
    Ignored,
    /// Movement stayed within the threshold; host opens table settings
    Click { table_id: String },
    /// Position committed once to the registry
    Moved { table_id: String, position: Point },
    /// Gesture abandoned; committed position untouched
    Cancelled { table_id: String },
}
