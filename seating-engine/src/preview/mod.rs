//! PreviewRenderer - read-only snapshot for print/share
//!
//! Uses the committed `(x, y)` and the same [`SeatLayout`] as the live canvas
//! so both views line up exactly. Never mutates anything.

use crate::geometry::{Seat, SeatLayout};
use crate::guests::GuestDirectory;
use crate::registry::TableRegistry;
use serde::{Deserialize, Serialize};
use shared::models::{Conflict, Table, TableShape};

/// Occupant names listed per table before collapsing into "+N more"
pub const MAX_LISTED_NAMES: usize = 3;
pub const EMPTY_TABLE_LABEL: &str = "Empty Table";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewMode {
    /// Table name plus a short guest list
    #[default]
    Names,
    /// Table number only
    Numbers,
}

/// Aggregate statistics over the committed plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewStats {
    pub table_count: usize,
    pub seated_guests: usize,
    pub total_capacity: u64,
    /// `round(seated / max(1, total_capacity) * 100)`
    pub occupancy_percent: u32,
}

impl PreviewStats {
    pub fn from_tables<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Self {
        let mut table_count = 0;
        let mut seated_guests = 0;
        let mut total_capacity = 0u64;
        for table in tables {
            table_count += 1;
            seated_guests += table.guest_ids.len();
            total_capacity += u64::from(table.capacity);
        }
        let ratio = seated_guests as f64 / total_capacity.max(1) as f64;
        Self {
            table_count,
            seated_guests,
            total_capacity,
            occupancy_percent: (ratio * 100.0).round() as u32,
        }
    }
}

/// One table as drawn in the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewTable {
    pub table_id: String,
    /// 1-based, creation order
    pub number: usize,
    pub shape: TableShape,
    pub x: f64,
    pub y: f64,
    /// Table name (`Names`) or "Table N" (`Numbers`)
    pub title: String,
    /// Guest lines under the title; empty in `Numbers` mode
    pub lines: Vec<String>,
    pub seats: Vec<Seat>,
    pub conflicts: Vec<Conflict>,
}

/// Complete static preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub mode: PreviewMode,
    pub tables: Vec<PreviewTable>,
    pub stats: PreviewStats,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewRenderer {
    layout: SeatLayout,
}

impl PreviewRenderer {
    pub fn new(layout: SeatLayout) -> Self {
        Self { layout }
    }

    pub fn render<G: GuestDirectory + ?Sized>(
        &self,
        tables: &TableRegistry,
        guests: &G,
        mode: PreviewMode,
    ) -> Preview {
        let rendered = tables
            .iter()
            .enumerate()
            .map(|(i, table)| self.render_table(i + 1, table, guests, mode))
            .collect();
        Preview {
            mode,
            tables: rendered,
            stats: PreviewStats::from_tables(tables.iter()),
        }
    }

    fn render_table<G: GuestDirectory + ?Sized>(
        &self,
        number: usize,
        table: &Table,
        guests: &G,
        mode: PreviewMode,
    ) -> PreviewTable {
        let (title, lines) = match mode {
            PreviewMode::Names => (table.name.clone(), guest_lines(table, guests)),
            PreviewMode::Numbers => (format!("Table {}", number), Vec::new()),
        };
        PreviewTable {
            table_id: table.id.clone(),
            number,
            shape: table.shape,
            x: table.x,
            y: table.y,
            title,
            lines,
            seats: self.layout.seats(table),
            conflicts: table.conflicts.clone(),
        }
    }
}

/// First few occupant names, an overflow marker, or the empty marker.
/// The overflow counts every seated id, including ones the directory no
/// longer knows.
fn guest_lines<G: GuestDirectory + ?Sized>(table: &Table, guests: &G) -> Vec<String> {
    if table.guest_ids.is_empty() {
        return vec![EMPTY_TABLE_LABEL.to_string()];
    }

    let mut lines: Vec<String> = table
        .guest_ids
        .iter()
        .filter_map(|id| guests.guest(id))
        .take(MAX_LISTED_NAMES)
        .map(|g| g.name.clone())
        .collect();
    let hidden = table.guest_ids.len() - lines.len();
    if hidden > 0 {
        lines.push(format!("+{} more", hidden));
    }
    lines
}
