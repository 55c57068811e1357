//! Seating conflict labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed, non-blocking warning about a table's occupants or settings.
///
/// Serialized as the human-readable label so host surfaces can render the
/// value as-is. Declaration order is the evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conflict {
    #[serde(rename = "Over capacity")]
    OverCapacity,
    #[serde(rename = "Critical: Food Allergy at Table")]
    FoodAllergy,
    #[serde(rename = "Non-VIP at Head Table")]
    NonVipAtHeadTable,
}

impl Conflict {
    pub const fn label(&self) -> &'static str {
        match self {
            Conflict::OverCapacity => "Over capacity",
            Conflict::FoodAllergy => "Critical: Food Allergy at Table",
            Conflict::NonVipAtHeadTable => "Non-VIP at Head Table",
        }
    }

    /// Critical conflicts are highlighted differently by the canvas
    pub const fn is_critical(&self) -> bool {
        matches!(self, Conflict::FoodAllergy)
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
