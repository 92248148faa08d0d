//! JSON directory list storage
//!
//! Implements `ListStore` with one JSON document per list.
//!
//! - [`codec`] - Encode and decode list documents
//! - [`store`] - `ListStore` implementation over a directory

pub mod codec;
pub mod store;

pub use codec::{decode, encode};
pub use store::{JsonListStore, SavedDocument, SavedDocuments};
