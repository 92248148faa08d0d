//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the list manager and the
//! systems it leans on: durable storage, and the clock/id source.
//!
//! Implementations live in the `adapters` module.

mod identity;
mod list_store;

pub use identity::IdentityProvider;
pub use list_store::ListStore;

#[cfg(test)]
pub use identity::MockIdentityProvider;
#[cfg(test)]
pub use list_store::MockListStore;
