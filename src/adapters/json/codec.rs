//! JSON document codec
//!
//! A document is a single JSON object: `{ "id", "name", "items": [...] }`,
//! with items as `{ "id", "text", "bought", "createdAt" }`. There is no
//! version field, so any change to this shape breaks existing documents.

use log::warn;

use crate::core::models::ShoppingList;
use crate::error::{Error, Result};

/// Serialize a list into its document text
///
/// The whole payload is built in memory before anything touches disk.
pub fn encode(list: &ShoppingList) -> Result<String> {
    Ok(serde_json::to_string_pretty(list)?)
}

/// Parse and normalize a document
///
/// Rejects an empty list id, empty item ids and duplicate item ids as
/// corrupt. Items out of partition order are stably re-partitioned.
pub fn decode(content: &str) -> Result<ShoppingList> {
    let list: ShoppingList = serde_json::from_str(content)?;

    if list.id.trim().is_empty() {
        return Err(Error::Corrupt("list id is empty".to_string()));
    }
    if list.items.iter().any(|i| i.id.is_empty()) {
        return Err(Error::Corrupt(format!("list {} has an item with an empty id", list.id)));
    }
    if !list.has_unique_item_ids() {
        return Err(Error::Corrupt(format!("list {} has duplicate item ids", list.id)));
    }

    if list.is_partitioned() {
        Ok(list)
    } else {
        warn!("storage: list {} had bought items before unbought ones; re-partitioned", list.id);
        Ok(list.repartitioned())
    }
}
