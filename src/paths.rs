//! Centralized path definitions for shoplist
//!
//! This module provides a single source of truth for all filesystem paths used by shoplist.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/shoplist/
//! └── lists/                  # Namespace: one document per list
//!     ├── 3f2a...e1.json
//!     └── 9b0c...47.json
//!
//! <config dir>/shoplist/
//! └── config.toml             # User preferences
//! ```
//!
//! `<data dir>` and `<config dir>` are the platform locations reported by
//! `dirs` (e.g. `~/.local/share` and `~/.config` on Linux).

use std::path::PathBuf;

/// Application directory name under the platform data/config dirs
pub const APP_DIR: &str = "shoplist";

/// Namespace subdirectory holding list documents
const LISTS_DIR: &str = "lists";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Extension of list documents
pub const DOCUMENT_EXTENSION: &str = "json";

/// Get the user-level config directory.
///
/// Falls back to `./.shoplist` when the platform has no config dir.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".shoplist"), |dir| dir.join(APP_DIR))
}

/// Get path to the config file.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the application data directory.
///
/// Falls back to `./.shoplist` when the platform has no data dir.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".shoplist"), |dir| dir.join(APP_DIR))
}

/// Get the default namespace for list documents.
#[must_use]
pub fn default_lists_dir() -> PathBuf {
    data_dir().join(LISTS_DIR)
}

/// File name of the document for a list id (`<id>.json`).
#[must_use]
pub fn document_file_name(list_id: &str) -> String {
    format!("{list_id}.{DOCUMENT_EXTENSION}")
}
