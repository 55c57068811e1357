//! GuestDirectory - the engine's view of the external guest list
//!
//! The directory owns the guests. The engine only reads them and writes the
//! `assigned_table_id` back-reference.

use shared::models::Guest;

/// Read access to guests plus write access to the seating back-reference
pub trait GuestDirectory {
    fn guest(&self, guest_id: &str) -> Option<&Guest>;

    fn guests(&self) -> Box<dyn Iterator<Item = &Guest> + '_>;

    /// Set or clear a guest's table back-reference. Returns false when the
    /// guest is unknown.
    fn set_assigned_table(&mut self, guest_id: &str, table_id: Option<&str>) -> bool;

    fn contains(&self, guest_id: &str) -> bool {
        self.guest(guest_id).is_some()
    }

    /// Guests with a table back-reference
    fn seated_count(&self) -> usize {
        self.guests().filter(|g| g.is_seated()).count()
    }
}

/// In-memory guest directory, insertion ordered
#[derive(Debug, Clone, Default)]
pub struct GuestBook {
    guests: Vec<Guest>,
}

impl GuestBook {
    pub fn new(guests: Vec<Guest>) -> Self {
        Self { guests }
    }

    /// Add a guest, replacing any existing entry with the same id
    pub fn insert(&mut self, guest: Guest) {
        match self.guests.iter_mut().find(|g| g.id == guest.id) {
            Some(existing) => *existing = guest,
            None => self.guests.push(guest),
        }
    }

    /// Mutable access for host-side edits (dietary notes, VIP flag)
    pub fn get_mut(&mut self, guest_id: &str) -> Option<&mut Guest> {
        self.guests.iter_mut().find(|g| g.id == guest_id)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Guests without a table, in directory order
    pub fn unseated(&self) -> impl Iterator<Item = &Guest> {
        self.guests.iter().filter(|g| !g.is_seated())
    }
}

impl FromIterator<Guest> for GuestBook {
    fn from_iter<I: IntoIterator<Item = Guest>>(iter: I) -> Self {
        let mut book = GuestBook::default();
        for guest in iter {
            book.insert(guest);
        }
        book
    }
}

impl GuestDirectory for GuestBook {
    fn guest(&self, guest_id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == guest_id)
    }

    fn guests(&self) -> Box<dyn Iterator<Item = &Guest> + '_> {
        Box::new(self.guests.iter())
    }

    fn set_assigned_table(&mut self, guest_id: &str, table_id: Option<&str>) -> bool {
        match self.guests.iter_mut().find(|g| g.id == guest_id) {
            Some(guest) => {
                guest.assigned_table_id = table_id.map(str::to_string);
                true
            }
            None => false,
        }
    }
}
