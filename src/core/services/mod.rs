//! Business logic services
//!
//! Services hold the rules of the domain and depend only on port traits.

mod list_manager;

pub use list_manager::{DEFAULT_NAME_PREFIX, ListManager, PendingWrite};
