//! Note collection persistence over one key-value slot.
//!
//! # Responsibility
//! - Read, append to, and filter the note collection stored as a JSON array.
//! - Report malformed persisted state instead of masking it.
//!
//! # Invariants
//! - Every mutation is a full read-modify-write of the slot.
//! - Nothing is cached between calls.
//! - A slot that fails to parse is never overwritten by a mutation.
//! - Insertion order is preserved; removal keeps the relative order of the rest.

use crate::model::note::{Note, NoteId};
use crate::storage::{KeyValueStorage, StorageError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key used by every version of the widget.
pub const DEFAULT_NOTES_KEY: &str = "noteApp.notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Note store failure.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying storage backend failed.
    Storage(StorageError),
    /// Slot exists but does not hold a JSON array of notes.
    Malformed {
        key: String,
        source: serde_json::Error,
    },
    /// Collection could not be serialized.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed { key, source } => {
                write!(f, "malformed note collection under `{key}`: {source}")
            }
            Self::Encode(err) => write!(f, "failed to encode note collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// CRUD over the persisted note collection.
pub struct NoteStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> NoteStore<S> {
    /// Creates a store over `storage` using [`DEFAULT_NOTES_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_NOTES_KEY)
    }

    /// Creates a store over `storage` using a caller-chosen slot key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Returns the slot key this store reads and writes.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Borrows the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store and returns the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Loads the full collection.
    ///
    /// An absent slot is an empty collection.
    ///
    /// # Errors
    /// - `RepoError::Malformed` when the slot text is not a JSON note array.
    /// - `RepoError::Storage` when the backend read fails.
    pub fn load_all(&self) -> RepoResult<Vec<Note>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| RepoError::Malformed {
            key: self.key.clone(),
            source,
        })
    }

    /// Loads the collection, falling back to empty on malformed state.
    ///
    /// The failure is logged and the stored text is left untouched.
    pub fn load_all_or_default(&self) -> Vec<Note> {
        match self.load_all() {
            Ok(notes) => notes,
            Err(err) => {
                error!(
                    "event=notes_load module=repo status=error key={} error={}",
                    self.key, err
                );
                Vec::new()
            }
        }
    }

    /// Appends one note to the end of the collection.
    pub fn append(&mut self, note: Note) -> RepoResult<()> {
        let mut notes = self.load_all()?;
        notes.push(note);
        self.persist(&notes)?;
        info!(
            "event=note_append module=repo status=ok count={}",
            notes.len()
        );
        Ok(())
    }

    /// Removes every note whose id equals `id`.
    ///
    /// Returns how many notes were removed; zero is not an error.
    pub fn remove(&mut self, id: NoteId) -> RepoResult<usize> {
        let mut notes = self.load_all()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        let removed = before - notes.len();
        self.persist(&notes)?;
        if removed == 0 {
            debug!("event=note_remove module=repo status=noop id={id}");
        } else {
            info!(
                "event=note_remove module=repo status=ok removed={removed} count={}",
                notes.len()
            );
        }
        Ok(removed)
    }

    fn persist(&mut self, notes: &[Note]) -> RepoResult<()> {
        let encoded = serde_json::to_string(notes).map_err(RepoError::Encode)?;
        self.storage.set_item(&self.key, &encoded)?;
        Ok(())
    }
}
