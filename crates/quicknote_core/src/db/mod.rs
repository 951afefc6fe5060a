//! SQLite bootstrap for the durable key-value backend.
//!
//! # Responsibility
//! - Open file or in-memory connections ready for `SqliteStorage`.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No key-value entry is read or written before migrations succeed.
//! - Failures surface as `StorageError`; the storage layer has one error type.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
