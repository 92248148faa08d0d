//! Item model

use serde::{Deserialize, Serialize};

use super::Partition;

/// A single entry on a shopping list
///
/// Serialized with the field names of the on-disk document:
/// `{ "id", "text", "bought", "createdAt" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque id, unique within the owning list
    pub id: String,

    /// What to buy (non-empty, trimmed)
    pub text: String,

    /// Whether it has been bought
    pub bought: bool,

    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

impl Item {
    /// Create a not-bought item
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            bought: false,
            created_at,
        }
    }

    /// The partition this item currently sits in
    #[must_use]
    pub const fn partition(&self) -> Partition {
        Partition::of(self.bought)
    }

    /// Copy of this item with the bought flag flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            bought: !self.bought,
            ..self.clone()
        }
    }
}
