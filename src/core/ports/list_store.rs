//! List store port
//!
//! Defines the interface for durably keeping one document per list.

use super::super::models::ShoppingList;
use crate::error::Result;

/// Durable storage for shopping lists, keyed by list id
///
/// Implementations own the backing namespace. Each list is written as a full
/// snapshot, so a successful `save` always replaces the previous document for
/// that id as a whole.
#[cfg_attr(test, mockall::automock)]
pub trait ListStore {
    /// Ensure the backing namespace exists
    ///
    /// Must be idempotent. Failure is escalated, not retried.
    fn initialize(&self) -> Result<()>;

    /// Write the full list, replacing any prior document for its id
    ///
    /// A failed write must leave the previous snapshot readable.
    fn save(&self, list: &ShoppingList) -> Result<()>;

    /// Read every parseable list
    ///
    /// Corrupt documents are skipped, and a missing or unreadable namespace
    /// yields an empty vector.
    fn load_all(&self) -> Vec<ShoppingList>;

    /// Remove the document for `list_id`; missing documents are not an error
    fn delete(&self, list_id: &str) -> Result<()>;
}

impl<T: ListStore + ?Sized> ListStore for &T {
    fn initialize(&self) -> Result<()> {
        (**self).initialize()
    }

    fn save(&self, list: &ShoppingList) -> Result<()> {
        (**self).save(list)
    }

    fn load_all(&self) -> Vec<ShoppingList> {
        (**self).load_all()
    }

    fn delete(&self, list_id: &str) -> Result<()> {
        (**self).delete(list_id)
    }
}
