//! Domain models for shoplist
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ShoppingList`] - A named list of items, persisted as one document
//! - [`Item`] - One entry with text and a bought flag
//! - [`Partition`] - The not-bought or bought half of a list

mod item;
mod list;
mod partition;

pub use item::Item;
pub use list::ShoppingList;
pub use partition::Partition;
