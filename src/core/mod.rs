//! Core domain logic for shoplist
//!
//! This module contains the list and item rules with no direct I/O.
//! Storage and id/clock sources are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ShoppingList`, `Item`, `Partition`)
//! - `services/` - `ListManager`, which applies and persists mutations
//! - `ports/` - Trait definitions for storage and identity

pub mod models;
pub mod ports;
pub mod services;
