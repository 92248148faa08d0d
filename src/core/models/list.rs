//! Shopping list model
//!
//! A list's `items` are always laid out as the not-bought run followed by the
//! bought run. Every mutation here returns a fresh `ShoppingList` and leaves
//! `self` untouched, so the manager can swap values in and out of its working
//! set without aliasing.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Item, Partition};
use crate::error::{Error, Result};

/// A named, ordered collection of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Opaque id, unique across the store
    pub id: String,

    /// Display name
    pub name: String,

    /// Not-bought items first, then bought items
    pub items: Vec<Item>,
}

impl ShoppingList {
    /// Create an empty list
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Look up an item by id
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Items of one partition, in their stored order
    pub fn partition(&self, partition: Partition) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| partition.contains(i.bought))
    }

    /// Items still to buy
    pub fn unbought(&self) -> impl Iterator<Item = &Item> {
        self.partition(Partition::Unbought)
    }

    /// Items already bought
    pub fn bought(&self) -> impl Iterator<Item = &Item> {
        self.partition(Partition::Bought)
    }

    /// Whether no bought item precedes a not-bought one
    #[must_use]
    pub fn is_partitioned(&self) -> bool {
        self.items.windows(2).all(|w| !(w[0].bought && !w[1].bought))
    }

    /// Whether every item id occurs once
    #[must_use]
    pub fn has_unique_item_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().all(|i| seen.insert(i.id.as_str()))
    }

    /// Copy with a new name; items unchanged
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy with `item` at the head of the not-bought run
    ///
    /// The item is stored as not bought regardless of its flag.
    pub fn with_item_prepended(&self, item: Item) -> Result<Self> {
        if self.item(&item.id).is_some() {
            return Err(Error::InvalidArgument(format!(
                "item id {} already exists in list {}",
                item.id, self.id
            )));
        }

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(Item {
            bought: false,
            ..item
        });
        items.extend(self.items.iter().cloned());

        Ok(Self {
            items,
            ..self.clone()
        })
    }

    /// Copy with one item's bought flag flipped, then stably re-partitioned
    ///
    /// Relative order inside each partition is preserved, so the toggled item
    /// lands where its current position falls among its new partition.
    pub fn with_bought_toggled(&self, item_id: &str) -> Result<Self> {
        if self.item(item_id).is_none() {
            return Err(Error::item_not_found(&self.id, item_id));
        }

        let items = self
            .items
            .iter()
            .map(|i| if i.id == item_id { i.toggled() } else { i.clone() })
            .collect();

        Ok(Self {
            items,
            ..self.clone()
        }
        .repartitioned())
    }

    /// Copy with one partition put into `new_order`
    ///
    /// `new_order` lists item ids and must be a permutation of the ids
    /// currently in `partition`. The other partition keeps its order and no
    /// bought flag changes.
    pub fn with_partition_reordered<I, S>(&self, partition: Partition, new_order: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut remaining: HashMap<&str, &Item> =
            self.partition(partition).map(|i| (i.id.as_str(), i)).collect();
        let expected = remaining.len();

        let mut reordered = Vec::with_capacity(expected);
        for id in new_order {
            let id = id.as_ref();
            let Some(item) = remaining.remove(id) else {
                let reason = if reordered.iter().any(|i: &Item| i.id == id) {
                    "appears more than once"
                } else {
                    "is not in that partition"
                };
                return Err(Error::InvalidArgument(format!(
                    "reorder of {partition} items in list {}: item {id} {reason}",
                    self.id
                )));
            };
            reordered.push(item.clone());
        }

        if !remaining.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "reorder of {partition} items in list {}: expected {expected} ids, got {}",
                self.id,
                reordered.len()
            )));
        }

        let others: Vec<Item> = self
            .items
            .iter()
            .filter(|i| !partition.contains(i.bought))
            .cloned()
            .collect();

        let items = match partition {
            Partition::Unbought => assemble(reordered, others),
            Partition::Bought => assemble(others, reordered),
        };

        Ok(Self {
            items,
            ..self.clone()
        })
    }

    /// Stable partition: not-bought items first, bought items last
    #[must_use]
    pub fn repartitioned(self) -> Self {
        let (unbought, bought): (Vec<Item>, Vec<Item>) =
            self.items.into_iter().partition(|i| !i.bought);

        Self {
            items: assemble(unbought, bought),
            ..self
        }
    }
}

fn assemble(mut unbought: Vec<Item>, bought: Vec<Item>) -> Vec<Item> {
    unbought.extend(bought);
    unbought
}
