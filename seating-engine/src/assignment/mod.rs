//! AssignmentEngine - one table per guest, capacity enforced
//!
//! Every applied mutation is followed by a whole-list conflict recompute.
//! Rejected requests leave tables and guests untouched.

use crate::conflicts;
use crate::guests::GuestDirectory;
use crate::registry::TableRegistry;
use shared::seating::{AssignOutcome, UnassignOutcome};
use tracing::{debug, info, warn};

/// Seat `guest_id` at `table_id`, moving them away from any other table in the
/// same transition.
pub fn assign<G: GuestDirectory + ?Sized>(
    tables: &mut TableRegistry,
    guests: &mut G,
    guest_id: &str,
    table_id: &str,
) -> AssignOutcome {
    let Some(target) = tables.get(table_id) else {
        debug!(guest_id, table_id, "Assign rejected: table not found");
        return AssignOutcome::TableNotFound;
    };
    if !guests.contains(guest_id) {
        debug!(guest_id, table_id, "Assign rejected: guest not found");
        return AssignOutcome::GuestNotFound;
    }
    if target.has_guest(guest_id) {
        return AssignOutcome::AlreadyAtTable;
    }
    if target.is_full() {
        debug!(
            guest_id,
            table_id,
            capacity = target.capacity,
            "Assign rejected: table full"
        );
        return AssignOutcome::TableFull;
    }

    let mut previous = None;
    for table in tables.iter_mut() {
        let before = table.guest_ids.len();
        table.guest_ids.retain(|id| id != guest_id);
        if table.guest_ids.len() != before {
            previous = Some(table.id.clone());
        }
    }
    if let Some(target) = tables.get_mut(table_id) {
        target.guest_ids.push(guest_id.to_string());
    }
    guests.set_assigned_table(guest_id, Some(table_id));

    conflicts::recompute(tables, &*guests);

    info!(guest_id, table_id, previous_table_id = ?previous, "Guest assigned");
    match previous {
        Some(previous) => AssignOutcome::AlreadySeatedElsewhere { previous },
        None => AssignOutcome::Assigned,
    }
}

/// Remove `guest_id` from `table_id`. Idempotent for guests not at that table.
pub fn unassign<G: GuestDirectory + ?Sized>(
    tables: &mut TableRegistry,
    guests: &mut G,
    guest_id: &str,
    table_id: &str,
) -> UnassignOutcome {
    let Some(table) = tables.get_mut(table_id) else {
        debug!(guest_id, table_id, "Unassign rejected: table not found");
        return UnassignOutcome::TableNotFound;
    };
    let before = table.guest_ids.len();
    table.guest_ids.retain(|id| id != guest_id);
    if table.guest_ids.len() == before {
        return UnassignOutcome::NotSeated;
    }

    let points_here = guests
        .guest(guest_id)
        .is_some_and(|g| g.assigned_table_id.as_deref() == Some(table_id));
    if points_here {
        guests.set_assigned_table(guest_id, None);
    }

    conflicts::recompute(tables, &*guests);

    info!(guest_id, table_id, "Guest unassigned");
    UnassignOutcome::Unassigned
}

/// Unseat every occupant of `table_id` (used before deleting a table).
/// Returns the unseated guest ids in seat order.
pub fn clear_table<G: GuestDirectory + ?Sized>(
    tables: &mut TableRegistry,
    guests: &mut G,
    table_id: &str,
) -> Vec<String> {
    let Some(table) = tables.get_mut(table_id) else {
        return Vec::new();
    };
    let unseated = std::mem::take(&mut table.guest_ids);
    for guest_id in &unseated {
        guests.set_assigned_table(guest_id, None);
    }
    if !unseated.is_empty() {
        conflicts::recompute(tables, &*guests);
        info!(table_id, count = unseated.len(), "Table cleared");
    }
    unseated
}

/// Point every guest's back-reference at the table that actually seats them.
/// Tables are authoritative. Returns the ids that were rewritten.
pub fn sync_back_references<G: GuestDirectory + ?Sized>(
    tables: &TableRegistry,
    guests: &mut G,
) -> Vec<String> {
    let stale: Vec<(String, Option<String>)> = guests
        .guests()
        .filter_map(|guest| {
            let seated_at = tables.find_table_of(&guest.id).map(|t| t.id.clone());
            (guest.assigned_table_id != seated_at).then(|| (guest.id.clone(), seated_at))
        })
        .collect();

    for (guest_id, table_id) in &stale {
        guests.set_assigned_table(guest_id, table_id.as_deref());
        warn!(guest_id = %guest_id, table_id = ?table_id, "Restored guest back-reference");
    }
    stale.into_iter().map(|(guest_id, _)| guest_id).collect()
}
