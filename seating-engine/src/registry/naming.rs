//! Default table naming keyed by shape

use serde::{Deserialize, Serialize};
use shared::models::TableShape;

/// Names given to freshly created tables, one per shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    pub round: String,
    pub rectangle: String,
}

impl NamingPolicy {
    pub fn new(round: impl Into<String>, rectangle: impl Into<String>) -> Self {
        Self {
            round: round.into(),
            rectangle: rectangle.into(),
        }
    }

    pub fn default_name(&self, shape: TableShape) -> &str {
        match shape {
            TableShape::Round => &self.round,
            TableShape::Rectangle => &self.rectangle,
        }
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::new("Friends", "Colleagues")
    }
}
