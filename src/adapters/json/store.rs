//! Directory-of-JSON list store
//!
//! Implements `ListStore` with one `<id>.json` document per list in a single
//! directory (the namespace).

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use tempfile::NamedTempFile;

use super::codec::{decode, encode};
use crate::core::models::ShoppingList;
use crate::core::ports::ListStore;
use crate::error::{Error, Result};
use crate::paths;

/// List store backed by a directory of JSON documents
#[derive(Debug, Clone)]
pub struct JsonListStore {
    dir: PathBuf,
}

/// One file found in the namespace
#[derive(Debug, Clone, Serialize)]
pub struct SavedDocument {
    /// File name inside the namespace
    pub name: String,
    /// Raw content, if it could be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Raw view of the namespace, for diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct SavedDocuments {
    /// Namespace directory
    pub dir: PathBuf,
    /// Every `.json` document, ordered by name
    pub files: Vec<SavedDocument>,
}

impl JsonListStore {
    /// Create a store over `dir`; nothing is touched until used
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The namespace directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document for `list_id`
    ///
    /// Rejects ids that are empty or would escape the namespace.
    pub fn document_path(&self, list_id: &str) -> Result<PathBuf> {
        validate_id(list_id)?;
        Ok(self.dir.join(paths::document_file_name(list_id)))
    }

    /// List every document in the namespace with its raw content
    pub fn saved_documents(&self) -> Result<SavedDocuments> {
        self.initialize()?;
        let files = self
            .document_paths()?
            .into_iter()
            .map(|path| SavedDocument {
                name: path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
                content: fs::read_to_string(&path).ok(),
            })
            .collect();

        Ok(SavedDocuments {
            dir: self.dir.clone(),
            files,
        })
    }

    fn document_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_document(path))
            .collect();
        paths.sort();
        Ok(paths)
    }
}

impl ListStore for JsonListStore {
    fn initialize(&self) -> Result<()> {
        if self.dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        debug!("storage: created lists directory {}", self.dir.display());
        Ok(())
    }

    fn save(&self, list: &ShoppingList) -> Result<()> {
        let path = self.document_path(&list.id)?;
        let payload = encode(list)?;
        self.initialize()?;

        // Write beside the target, then rename over it
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| Error::io(&self.dir, e))?;
        tmp.write_all(payload.as_bytes()).map_err(|e| Error::io(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| Error::io(&path, e.error))?;

        debug!("storage: wrote {}", path.display());
        Ok(())
    }

    fn load_all(&self) -> Vec<ShoppingList> {
        let paths = match self.document_paths() {
            Ok(paths) => paths,
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("storage: no lists directory at {} yet", self.dir.display());
                return Vec::new();
            },
            Err(err) => {
                warn!("storage: cannot enumerate lists: {err}");
                return Vec::new();
            },
        };

        let lists: Vec<ShoppingList> = paths.iter().filter_map(|path| read_document(path)).collect();
        debug!(
            "storage: loaded ids={:?}",
            lists.iter().map(|l| l.id.as_str()).collect::<Vec<_>>()
        );
        lists
    }

    fn delete(&self, list_id: &str) -> Result<()> {
        let path = self.document_path(list_id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("storage: deleted {}", path.display());
                Ok(())
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::io(path, err)),
        }
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::InvalidArgument("list id is empty".to_string()));
    }
    if id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidArgument(format!("list id {id:?} is not a valid file name")));
    }
    Ok(())
}

fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json") && path.is_file()
}

fn read_document(path: &Path) -> Option<ShoppingList> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("storage: failed to read {}: {err}", path.display());
            return None;
        },
    };

    let list = match decode(&content) {
        Ok(list) => list,
        Err(err) => {
            warn!("storage: skipping {}: {err}", path.display());
            return None;
        },
    };

    // Only `<id>.json` is authoritative for an id; copies are ignored
    if path.file_stem().is_none_or(|stem| stem != list.id.as_str()) {
        warn!("storage: skipping {}: holds list {} under another name", path.display(), list.id);
        return None;
    }
    Some(list)
}
