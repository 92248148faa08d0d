//! List manager - the in-memory authority over all shopping lists
//!
//! Every public mutation is one command: compute the new list value, swap it
//! into the working set, then hand it to the store. A mutation only counts as
//! committed once the store accepted it. When the store fails, the new state
//! stays in memory, the error comes back as `Error::Persistence`, and the list
//! is remembered as a pending write until a later save or `retry_pending`
//! succeeds.
//!
//! Mutating methods take `&mut self`, so at most one mutation is in flight
//! and saves for a list are issued in the order the mutations were made.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::core::models::{Item, Partition, ShoppingList};
use crate::core::ports::{IdentityProvider, ListStore};
use crate::error::{Error, Result};

/// Name prefix for lists created without a name
pub const DEFAULT_NAME_PREFIX: &str = "List";

/// A durable write that has not gone through yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingWrite {
    /// The in-memory snapshot of the list still has to be saved
    Save,
    /// The list was removed from memory but its document still exists
    Delete,
}

/// Owns the working set of lists and applies mutations to it
#[derive(Debug)]
pub struct ListManager<S, I> {
    store: S,
    identity: I,
    lists: Vec<ShoppingList>,
    pending: BTreeMap<String, PendingWrite>,
    name_prefix: String,
}

impl<S: ListStore, I: IdentityProvider> ListManager<S, I> {
    /// Create a manager over an already loaded working set
    pub fn new(store: S, identity: I, lists: Vec<ShoppingList>) -> Self {
        Self {
            store,
            identity,
            lists,
            pending: BTreeMap::new(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
        }
    }

    /// Initialize the store and seed the working set from it
    ///
    /// Lists come back newest first (ids sort in creation order), and the
    /// identity provider is told the latest item timestamp on record.
    pub fn open(store: S, identity: I) -> Result<Self> {
        store.initialize()?;
        let mut lists = store.load_all();
        lists.sort_by(|a, b| b.id.cmp(&a.id));

        if let Some(latest) = lists.iter().flat_map(|l| &l.items).map(|i| i.created_at).max() {
            identity.observe_millis(latest);
        }

        debug!("manager: opened with {} list(s)", lists.len());
        Ok(Self::new(store, identity, lists))
    }

    /// Use `prefix` when naming lists created without a name
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// All lists, most recently created first
    #[must_use]
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// Look up a list by id
    #[must_use]
    pub fn get(&self, list_id: &str) -> Option<&ShoppingList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    /// The first list in the working set, if any
    #[must_use]
    pub fn first(&self) -> Option<&ShoppingList> {
        self.lists.first()
    }

    /// Number of lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether there are no lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Create an empty list and put it first in the working set
    ///
    /// A blank or missing name falls back to `"<prefix> <n>"`, where `n` is
    /// the working-set size after the insert.
    pub fn create_list(&mut self, name: Option<&str>) -> Result<ShoppingList> {
        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{} {}", self.name_prefix, self.lists.len() + 1),
        };

        let list = ShoppingList::new(self.identity.next_id(), name);
        if self.get(&list.id).is_some() {
            return Err(Error::InvalidArgument(format!("list id {} already exists", list.id)));
        }

        info!("manager: created list {} ({})", list.id, list.name);
        self.lists.insert(0, list.clone());
        self.commit(list)
    }

    /// Rename a list
    ///
    /// A name that is blank after trimming is ignored and the list is
    /// returned unchanged without touching the store.
    pub fn rename_list(&mut self, list_id: &str, new_name: &str) -> Result<ShoppingList> {
        let current = self.require(list_id)?;
        let new_name = new_name.trim();
        if new_name.is_empty() {
            debug!("manager: ignoring blank rename of {list_id}");
            return Ok(current.clone());
        }

        let updated = current.renamed(new_name);
        self.replace(updated.clone());
        self.commit(updated)
    }

    /// Remove a list and erase its document
    pub fn delete_list(&mut self, list_id: &str) -> Result<()> {
        let position = self
            .lists
            .iter()
            .position(|l| l.id == list_id)
            .ok_or_else(|| Error::list_not_found(list_id))?;

        let removed = self.lists.remove(position);
        info!("manager: deleted list {} ({})", removed.id, removed.name);

        match self.store.delete(list_id) {
            Ok(()) => {
                self.pending.remove(list_id);
                Ok(())
            },
            Err(err) => {
                warn!("manager: delete of {list_id} not persisted: {err}");
                self.pending.insert(list_id.to_string(), PendingWrite::Delete);
                Err(Error::persistence(list_id, err))
            },
        }
    }

    /// Add an item at the head of the not-bought partition
    ///
    /// Text that is blank after trimming is ignored and the list is returned
    /// unchanged without touching the store.
    pub fn add_item(&mut self, list_id: &str, text: &str) -> Result<ShoppingList> {
        let current = self.require(list_id)?;
        let text = text.trim();
        if text.is_empty() {
            debug!("manager: ignoring blank item for {list_id}");
            return Ok(current.clone());
        }

        let item = Item::new(self.identity.next_id(), text, self.identity.now_millis());
        let updated = current.with_item_prepended(item)?;
        self.replace(updated.clone());
        self.commit(updated)
    }

    /// Flip an item's bought flag and re-partition the list
    pub fn toggle_bought(&mut self, list_id: &str, item_id: &str) -> Result<ShoppingList> {
        let updated = self.require(list_id)?.with_bought_toggled(item_id)?;
        self.replace(updated.clone());
        self.commit(updated)
    }

    /// Put one partition into `new_order` (item ids), leaving the other alone
    ///
    /// On a malformed permutation nothing changes and nothing is persisted.
    pub fn reorder_partition<T, R>(
        &mut self,
        list_id: &str,
        partition: Partition,
        new_order: T,
    ) -> Result<ShoppingList>
    where
        T: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let updated = self.require(list_id)?.with_partition_reordered(partition, new_order)?;
        self.replace(updated.clone());
        self.commit(updated)
    }

    /// Lists whose durable copy differs from memory, with what is owed
    #[must_use]
    pub const fn pending_writes(&self) -> &BTreeMap<String, PendingWrite> {
        &self.pending
    }

    /// Whether any list has an unpersisted change
    #[must_use]
    pub fn has_pending_writes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Replay pending writes in list-id order
    ///
    /// Stops at the first failure, which is returned as `Error::Persistence`;
    /// writes already replayed stay cleared.
    pub fn retry_pending(&mut self) -> Result<()> {
        let owed: Vec<(String, PendingWrite)> =
            self.pending.iter().map(|(id, write)| (id.clone(), *write)).collect();

        for (list_id, write) in owed {
            let outcome = match write {
                PendingWrite::Save => match self.get(&list_id) {
                    Some(list) => self.store.save(list),
                    None => Ok(()),
                },
                PendingWrite::Delete => self.store.delete(&list_id),
            };

            outcome.map_err(|err| Error::persistence(&list_id, err))?;
            debug!("manager: replayed pending {write:?} for {list_id}");
            self.pending.remove(&list_id);
        }

        Ok(())
    }

    fn require(&self, list_id: &str) -> Result<&ShoppingList> {
        self.get(list_id).ok_or_else(|| Error::list_not_found(list_id))
    }

    fn replace(&mut self, updated: ShoppingList) {
        if let Some(slot) = self.lists.iter_mut().find(|l| l.id == updated.id) {
            *slot = updated;
        }
    }

    fn commit(&mut self, list: ShoppingList) -> Result<ShoppingList> {
        match self.store.save(&list) {
            Ok(()) => {
                self.pending.remove(&list.id);
                Ok(list)
            },
            Err(err) => {
                warn!("manager: save of {} not persisted: {err}", list.id);
                self.pending.insert(list.id.clone(), PendingWrite::Save);
                Err(Error::persistence(&list.id, err))
            },
        }
    }
}
