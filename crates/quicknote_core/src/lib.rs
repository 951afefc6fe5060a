//! Core logic for QuickNote, a small note-taking widget.
//! The note store and list projection live here; front ends inject storage
//! and view handles.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod storage;
pub mod ui;

pub use config::{ConfigError, QuickNoteConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::note::{
    Note, NoteId, NoteIdGenerator, NoteValidationError, ParseNoteIdError, MAX_EXACT_NOTE_ID,
};
pub use repo::note_store::{NoteStore, RepoError, RepoResult, DEFAULT_NOTES_KEY};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult};
pub use ui::clock::{Clock, ManualClock, SystemClock};
pub use ui::markup::HtmlView;
pub use ui::message::{AlertKind, MessageId, TransientMessage};
pub use ui::modal::ModalState;
pub use ui::projection::{ListProjection, ProjectionError, SubmitOutcome};
pub use ui::view::{NoteView, RecordingView};

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
