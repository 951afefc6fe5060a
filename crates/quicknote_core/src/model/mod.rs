//! Domain model for notes and their identifiers.
//!
//! # Responsibility
//! - Define the persisted `Note` shape shared by store and projection.
//! - Own id generation so new notes never collide with stored ones.
//!
//! # Invariants
//! - `Note` serializes to `{ "title", "body", "id" }` with a numeric id.
//! - Notes are immutable after creation; deletion is the only lifecycle step.

pub mod note;
