//! Key-value storage facility backing the note store.
//!
//! # Responsibility
//! - Define the string-to-string slot contract the note store persists into.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - `get_item` on an absent key returns `Ok(None)`, never an error.
//! - `set_item` fully replaces the previous value.
//! - `remove_item` on an absent key is a no-op.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// SQLite rejected a statement or the database file.
    Sqlite(rusqlite::Error),
    /// Database was written by a newer build with an unknown layout.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    /// Write would grow the stored text past the backend's byte quota.
    QuotaExceeded {
        key: String,
        required_bytes: usize,
        quota_bytes: usize,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite storage failure: {err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "key-value schema version {found} is newer than supported {supported}"
            ),
            Self::QuotaExceeded {
                key,
                required_bytes,
                quota_bytes,
            } => write!(
                f,
                "writing `{key}` needs {required_bytes} bytes; quota is {quota_bytes}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Persistent string slots addressed by key, shaped after browser local storage.
pub trait KeyValueStorage {
    /// Returns the stored text for `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Deletes `key` if present.
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
