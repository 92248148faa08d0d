//! User configuration
//!
//! Stored at `<config dir>/shoplist/config.toml`. Every field is optional;
//! a missing or unreadable file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::services::DEFAULT_NAME_PREFIX;
use crate::error::{Error, Result};
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where list documents live
    #[serde(default)]
    pub storage: StorageConfig,
    /// List defaults
    #[serde(default)]
    pub lists: ListsConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Namespace directory; the platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lists_dir: Option<PathBuf>,
}

/// Defaults for new lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsConfig {
    /// Prefix of generated names ("List" gives "List 1", "List 2", ...)
    #[serde(default = "default_name_prefix")]
    pub default_name_prefix: String,
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            default_name_prefix: default_name_prefix(),
        }
    }
}

impl Config {
    /// Load config from the user config file, or defaults
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::config_file())
    }

    /// Load config from `path`, or defaults if missing or unparsable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                log::warn!("config: ignoring unparsable {}: {err}", path.display());
                Self::default()
            }),
            Err(err) => {
                log::warn!("config: cannot read {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidArgument(format!("config not serializable: {e}")))?;
        fs::write(path, content).map_err(|e| Error::io(path, e))
    }

    /// Resolve the namespace directory
    #[must_use]
    pub fn lists_dir(&self) -> PathBuf {
        self.storage.lists_dir.clone().unwrap_or_else(paths::default_lists_dir)
    }
}
