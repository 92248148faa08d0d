//! Adapter tests for shoplist
//!
//! These tests run the JSON list store against real temporary directories.
