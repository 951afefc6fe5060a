//! List projection of the note collection.
//!
//! # Responsibility
//! - Turn user gestures (submit, view, delete, close) into note store calls.
//! - Keep the injected view consistent with the store, incrementally.
//! - Own transient feedback messages and the detail modal state.
//!
//! # Invariants
//! - The projection never queries global UI state; all handles are injected.
//! - Rejected input never reaches the note store.

pub mod clock;
pub mod markup;
pub mod message;
pub mod modal;
pub mod projection;
pub mod view;
