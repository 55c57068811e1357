//! Guest Model

use serde::{Deserialize, Serialize};

/// Group label that marks a guest as part of the VIP party even when the
/// `is_vip` flag is not set.
pub const VIP_GROUP: &str = "VIP";

/// Guest entity (宾客)
///
/// Owned by an external guest directory. The engine only reads the
/// descriptive fields and writes `assigned_table_id` as a side effect of
/// assign/unassign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub group: String,
    #[serde(default)]
    pub is_vip: bool,
    /// Free-text dietary notes, e.g. "Peanut Allergy"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<String>,
    /// Back-reference to the table currently seating this guest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_table_id: Option<String>,
}

impl Guest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: group.into(),
            is_vip: false,
            dietary: None,
            assigned_table_id: None,
        }
    }

    pub fn vip(mut self) -> Self {
        self.is_vip = true;
        self
    }

    pub fn with_dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = Some(dietary.into());
        self
    }

    /// Whether the dietary notes mention an allergy (case-insensitive)
    pub fn has_allergy(&self) -> bool {
        self.dietary
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains("allergy"))
    }

    /// Neither flagged VIP nor part of the VIP group
    pub fn is_regular(&self) -> bool {
        !self.is_vip && self.group != VIP_GROUP
    }

    pub fn is_seated(&self) -> bool {
        self.assigned_table_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_allergy_is_case_insensitive() {
        let guest = Guest::new("g1", "Ana", "Family").with_dietary("Peanut ALLERGY");
        assert!(guest.has_allergy());

        let guest = Guest::new("g2", "Ben", "Family").with_dietary("Vegetarian");
        assert!(!guest.has_allergy());

        let guest = Guest::new("g3", "Cy", "Family");
        assert!(!guest.has_allergy());
    }

    #[test]
    fn test_vip_group_is_not_regular() {
        let guest = Guest::new("g1", "Ana", VIP_GROUP);
        assert!(!guest.is_vip);
        assert!(!guest.is_regular());

        let guest = Guest::new("g2", "Ben", "Friends").vip();
        assert!(!guest.is_regular());

        let guest = Guest::new("g3", "Cy", "Friends");
        assert!(guest.is_regular());
    }

    #[test]
    fn test_deserialize_defaults() {
        let guest: Guest =
            serde_json::from_str(r#"{"id":"g1","name":"Ana","group":"Family"}"#).unwrap();
        assert!(!guest.is_vip);
        assert!(guest.dietary.is_none());
        assert!(guest.assigned_table_id.is_none());
    }
}
