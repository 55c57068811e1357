//! ConflictDetector - pure re-evaluation of warning rules
//!
//! Rules run in a fixed order and never short-circuit:
//! 1. capacity
//! 2. food allergy
//! 3. VIP mixing at a head table
//!
//! Conflicts are derived state. `recompute` rewrites every table's list from
//! scratch; nothing else writes `Table::conflicts`.

use crate::guests::GuestDirectory;
use crate::registry::TableRegistry;
use shared::models::{Conflict, Guest, Table};
use tracing::debug;

/// Substring (case-insensitive) that marks a head table
const HEAD_TABLE_MARKER: &str = "head";

/// Conflicts of one table, in rule order
pub fn conflicts<G: GuestDirectory + ?Sized>(table: &Table, guests: &G) -> Vec<Conflict> {
    let occupants: Vec<&Guest> = table
        .guest_ids
        .iter()
        .filter_map(|id| guests.guest(id))
        .collect();

    let mut found = Vec::new();

    if table.guest_ids.len() > table.capacity as usize {
        found.push(Conflict::OverCapacity);
    }

    if occupants.iter().any(|g| g.has_allergy()) {
        found.push(Conflict::FoodAllergy);
    }

    let is_head_table = table.name.to_lowercase().contains(HEAD_TABLE_MARKER);
    if is_head_table
        && occupants.iter().any(|g| g.is_vip)
        && occupants.iter().any(|g| g.is_regular())
    {
        found.push(Conflict::NonVipAtHeadTable);
    }

    found
}

/// Re-annotate every table with fresh conflicts.
///
/// Returns the ids of tables whose conflict list changed, in table order.
pub fn recompute<G: GuestDirectory + ?Sized>(tables: &mut TableRegistry, guests: &G) -> Vec<String> {
    let mut changed = Vec::new();
    for table in tables.iter_mut() {
        let fresh = conflicts(table, guests);
        if fresh != table.conflicts {
            table.conflicts = fresh;
            changed.push(table.id.clone());
        }
    }
    debug!(tables = tables.len(), changed = changed.len(), "Conflicts recomputed");
    changed
}
