//! Persistence layer for the note collection.
//!
//! # Responsibility
//! - Map the note collection onto one key-value slot.
//! - Keep JSON encoding details out of the UI projection.
//!
//! # Invariants
//! - Repository APIs surface malformed state as `RepoError::Malformed`.

pub mod note_store;
