//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - One JSON document per list in a directory
//! - `system` - uuid ids and a monotonic wall clock

pub mod json;
pub mod system;

pub use json::JsonListStore;
pub use system::SystemIdentity;
