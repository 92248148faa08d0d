//! Error types for the shoplist core
//!
//! One enum covers the whole library. `NotFound` and `InvalidArgument` are
//! usage errors and go straight back to the caller. `Io`, `Json` and `Corrupt` come
//! from the store. The manager wraps them in `Persistence` when a mutation
//! was applied in memory but could not be written.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

/// What a `NotFound` error refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    /// No list with this id in the working set
    List(String),
    /// The list exists but holds no item with this id
    Item {
        /// Owning list id
        list_id: String,
        /// Requested item id
        item_id: String,
    },
}

impl std::fmt::Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(id) => write!(f, "list {id}"),
            Self::Item { list_id, item_id } => write!(f, "item {item_id} in list {list_id}"),
        }
    }
}

/// Errors raised by the list manager and the persistence store
#[derive(Debug, Error)]
pub enum Error {
    /// Referenced list or item does not exist
    #[error("not found: {0}")]
    NotFound(Missing),

    /// Malformed argument (bad reorder permutation, unsafe or empty id)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Namespace or document I/O failure
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A list could not be serialized or a document could not be parsed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document parsed but breaks a list invariant
    #[error("corrupt document: {0}")]
    Corrupt(String),

    /// The in-memory change was applied but could not be made durable
    #[error("list {list_id} changed in memory but was not persisted: {source}")]
    Persistence {
        /// List whose durable copy is now stale
        list_id: String,
        /// Store failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Shorthand for a missing list
    pub fn list_not_found(id: impl Into<String>) -> Self {
        Self::NotFound(Missing::List(id.into()))
    }

    /// Shorthand for a missing item
    pub fn item_not_found(list_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self::NotFound(Missing::Item {
            list_id: list_id.into(),
            item_id: item_id.into(),
        })
    }

    /// Wrap an I/O failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn persistence(list_id: impl Into<String>, source: Self) -> Self {
        Self::Persistence {
            list_id: list_id.into(),
            source: Box::new(source),
        }
    }

    /// Whether this is a `NotFound` error
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this is an `InvalidArgument` error
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this is a `Persistence` error
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}
