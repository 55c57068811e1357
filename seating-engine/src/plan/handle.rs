//! Thread-safe plan handle
//!
//! Every operation takes the one lock, so mutations from different threads
//! are serialized and the single-seat invariant holds between them.

use std::sync::Arc;

use parking_lot::Mutex;
use shared::models::Table;
use shared::seating::{AssignOutcome, CommandResponse, SeatingCommand};

use super::SeatingPlan;
use crate::guests::{GuestBook, GuestDirectory};
use crate::preview::{Preview, PreviewMode};

pub struct SharedSeatingPlan<G: GuestDirectory = GuestBook> {
    inner: Arc<Mutex<SeatingPlan<G>>>,
}

impl<G: GuestDirectory> Clone for SharedSeatingPlan<G> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<G: GuestDirectory> SharedSeatingPlan<G> {
    pub fn new(plan: SeatingPlan<G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(plan)),
        }
    }

    pub fn execute_command(&self, cmd: SeatingCommand) -> CommandResponse {
        self.inner.lock().execute_command(cmd)
    }

    pub fn assign_guest(&self, guest_id: &str, table_id: &str) -> AssignOutcome {
        self.inner.lock().assign_guest(guest_id, table_id)
    }

    /// Run `f` with exclusive access to the plan
    pub fn with<R>(&self, f: impl FnOnce(&mut SeatingPlan<G>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Committed tables, cloned out of the lock
    pub fn tables(&self) -> Vec<Table> {
        self.inner.lock().tables().tables().to_vec()
    }

    pub fn preview(&self, mode: PreviewMode) -> Preview {
        self.inner.lock().preview(mode)
    }
}

impl<G: GuestDirectory> From<SeatingPlan<G>> for SharedSeatingPlan<G> {
    fn from(plan: SeatingPlan<G>) -> Self {
        Self::new(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use shared::models::{Guest, TableShape};
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_concurrent_assignments_keep_one_seat_per_guest() {
        let guests: GuestBook = (0..20)
            .map(|i| Guest::new(format!("g{i}"), format!("Guest {i}"), "Family"))
            .collect();
        let mut plan = SeatingPlan::new(&Config::default(), guests);
        let ids: Vec<String> = (0..3).map(|_| plan.create_table(TableShape::Round).id).collect();
        let shared = SharedSeatingPlan::new(plan);

        let workers: Vec<_> = ids
            .iter()
            .cloned()
            .map(|table_id| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..20 {
                        shared.assign_guest(&format!("g{i}"), &table_id);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let tables = shared.tables();
        let mut seen = HashSet::new();
        for table in &tables {
            assert!(table.guest_ids.len() <= table.capacity as usize);
            for guest_id in &table.guest_ids {
                assert!(seen.insert(guest_id.clone()), "{guest_id} seated twice");
            }
        }
        shared.with(|plan| {
            for guest_id in &seen {
                let table_id = plan.guests().guest(guest_id).unwrap().assigned_table_id.clone();
                let table = plan.tables().find_table_of(guest_id).unwrap();
                assert_eq!(table_id.as_deref(), Some(table.id.as_str()));
            }
        });
    }
}
