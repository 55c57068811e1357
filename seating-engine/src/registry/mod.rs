//! TableRegistry - owns the seating tables
//!
//! Creation order is preserved; it is the numbering used by the preview's
//! `Numbers` mode.

mod naming;

pub use naming::NamingPolicy;

use crate::core::{Config, SeatingError, SeatingResult};
use shared::models::{Point, Table, TableShape, TableUpdate};
use shared::util::new_id;
use tracing::{debug, info, warn};

/// Table collection plus the creation defaults
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<Table>,
    naming: NamingPolicy,
    default_capacity: u32,
    spawn: Point,
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl TableRegistry {
    pub fn new(config: &Config) -> Self {
        Self {
            tables: Vec::new(),
            naming: config.naming.clone(),
            default_capacity: config.default_capacity.max(1),
            spawn: config.spawn_position,
        }
    }

    /// Create a table with the shape's default name, default capacity and the
    /// shared spawn position
    pub fn create(&mut self, shape: TableShape) -> Table {
        let table = Table {
            id: new_id(),
            name: self.naming.default_name(shape).to_string(),
            shape,
            capacity: self.default_capacity,
            guest_ids: Vec::new(),
            x: self.spawn.x,
            y: self.spawn.y,
            conflicts: Vec::new(),
        };
        info!(
            table_id = %table.id,
            shape = %shape,
            name = %table.name,
            capacity = table.capacity,
            "Table created"
        );
        self.tables.push(table.clone());
        table
    }

    /// Patch name and/or capacity.
    ///
    /// Shrinking below the current occupancy is allowed; guests are never
    /// evicted and the table is flagged "Over capacity" on the next recompute.
    pub fn update(&mut self, id: &str, patch: &TableUpdate) -> SeatingResult<()> {
        if patch.capacity == Some(0) {
            return Err(SeatingError::InvalidCapacity {
                table_id: id.to_string(),
                capacity: 0,
            });
        }
        let table = self
            .get_mut(id)
            .ok_or_else(|| SeatingError::TableNotFound(id.to_string()))?;

        if let Some(name) = &patch.name {
            table.name = name.clone();
        }
        if let Some(capacity) = patch.capacity {
            table.capacity = capacity;
            if table.guest_ids.len() > capacity as usize {
                warn!(
                    table_id = %id,
                    capacity,
                    seated = table.guest_ids.len(),
                    "Capacity reduced below occupancy"
                );
            }
        }
        debug!(table_id = %id, name = %table.name, capacity = table.capacity, "Table updated");
        Ok(())
    }

    /// Overwrite the committed position (drag commit only)
    pub fn move_to(&mut self, id: &str, x: f64, y: f64) -> SeatingResult<()> {
        let table = self
            .get_mut(id)
            .ok_or_else(|| SeatingError::TableNotFound(id.to_string()))?;
        table.x = x;
        table.y = y;
        debug!(table_id = %id, x, y, "Table moved");
        Ok(())
    }

    /// Remove a table; callers are responsible for clearing guest
    /// back-references first
    pub fn remove(&mut self, id: &str) -> Option<Table> {
        let index = self.tables.iter().position(|t| t.id == id)?;
        let table = self.tables.remove(index);
        info!(table_id = %id, seated = table.guest_ids.len(), "Table removed");
        Some(table)
    }

    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Tables in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.tables.iter_mut()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table currently seating `guest_id`
    pub fn find_table_of(&self, guest_id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.has_guest(guest_id))
    }

    pub fn naming(&self) -> &NamingPolicy {
        &self.naming
    }
}
