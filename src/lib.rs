//! shoplist - named shopping lists with bought/unbought partitions
//!
//! This library provides the list/item data model, the `ListManager` that
//! applies mutations to it, and the `JsonListStore` that keeps one JSON
//! document per list on disk.
//!
//! ```no_run
//! use shoplist::{JsonListStore, ListManager, SystemIdentity};
//!
//! let store = JsonListStore::new("/tmp/shoplist/lists");
//! let mut manager = ListManager::open(store, SystemIdentity::new())?;
//! let list = manager.create_list(Some("Groceries"))?;
//! manager.add_item(&list.id, "Milk")?;
//! # Ok::<(), shoplist::Error>(())
//! ```

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use adapters::{JsonListStore, SystemIdentity};
pub use config::Config;
pub use crate::core::models::{Item, Partition, ShoppingList};
pub use crate::core::ports::{IdentityProvider, ListStore};
pub use crate::core::services::{ListManager, PendingWrite};
pub use error::{Error, Missing, Result};
