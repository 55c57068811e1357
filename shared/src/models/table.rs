//! Seating Table Model

use super::{Conflict, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Table shape (桌型)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    Round,
    Rectangle,
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableShape::Round => write!(f, "round"),
            TableShape::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// Seating table entity (桌台)
///
/// `x`/`y` is the committed top-left corner on the canvas. `conflicts` is
/// derived state, rewritten wholesale by every recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub shape: TableShape,
    pub capacity: u32,
    /// Seated guest IDs in seat order
    pub guest_ids: Vec<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
}

impl Table {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn occupancy(&self) -> usize {
        self.guest_ids.len()
    }

    /// Seats still free; zero once the table is full or over capacity
    pub fn free_seats(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.guest_ids.len())
    }

    pub fn is_full(&self) -> bool {
        self.guest_ids.len() >= self.capacity as usize
    }

    pub fn has_guest(&self, guest_id: &str) -> bool {
        self.guest_ids.iter().any(|id| id == guest_id)
    }

    /// Seat occupancy is positional, never bound to a guest identity
    pub fn is_seat_occupied(&self, seat_index: usize) -> bool {
        seat_index < self.guest_ids.len()
    }
}

/// Update table payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl TableUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            capacity: None,
        }
    }

    pub fn capacity(capacity: u32) -> Self {
        Self {
            name: None,
            capacity: Some(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.capacity.is_none()
    }
}
