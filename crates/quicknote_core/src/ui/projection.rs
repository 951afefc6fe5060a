//! List projection: gesture handlers over the note store and injected view.
//!
//! # Responsibility
//! - Render the stored collection once at startup, then update incrementally.
//! - Validate form input and persist accepted notes.
//! - Post feedback messages and expire them on `tick`.
//!
//! # Invariants
//! - Store mutations are persisted before the view changes.
//! - Validation failures never touch the store.
//! - Viewing or closing the modal never touches the store.
//! - Every feedback message moves focus to the title input.

use crate::model::note::{validate_input, Note, NoteId, NoteIdGenerator, NoteValidationError};
use crate::repo::note_store::{NoteStore, RepoError};
use crate::storage::KeyValueStorage;
use crate::ui::clock::Clock;
use crate::ui::message::{AlertKind, MessageBoard, MessageId, DEFAULT_DISMISS_AFTER};
use crate::ui::modal::ModalState;
use crate::ui::view::NoteView;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Failure of a gesture handler that reached the note store.
#[derive(Debug)]
pub enum ProjectionError {
    Repo(RepoError),
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProjectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ProjectionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Note was persisted and rendered.
    Added(Note),
    /// Input was rejected; nothing was persisted.
    Rejected(NoteValidationError),
}

/// Keeps an injected view consistent with the persisted note collection.
pub struct ListProjection<S: KeyValueStorage, V: NoteView, C: Clock> {
    store: NoteStore<S>,
    view: V,
    clock: C,
    ids: NoteIdGenerator,
    rendered: Vec<Note>,
    modal: ModalState,
    messages: MessageBoard,
    dismiss_after: Duration,
}

impl<S: KeyValueStorage, V: NoteView, C: Clock> ListProjection<S, V, C> {
    /// Creates a projection with the default message lifetime.
    pub fn new(store: NoteStore<S>, view: V, clock: C) -> Self {
        Self {
            store,
            view,
            clock,
            ids: NoteIdGenerator::default(),
            rendered: Vec::new(),
            modal: ModalState::default(),
            messages: MessageBoard::new(),
            dismiss_after: DEFAULT_DISMISS_AFTER,
        }
    }

    /// Overrides how long feedback messages stay visible.
    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn messages(&self) -> &MessageBoard {
        &self.messages
    }

    /// Notes currently shown, in display order.
    pub fn rendered(&self) -> &[Note] {
        &self.rendered
    }

    /// Renders the whole stored collection.
    ///
    /// Malformed storage renders as an empty list (the error is logged by the
    /// store). Returns how many items were rendered.
    pub fn render_all(&mut self) -> usize {
        for note in self.rendered.drain(..) {
            self.view.remove_item(note.id);
        }

        let notes = self.store.load_all_or_default();
        self.ids.observe(&notes);
        for note in &notes {
            self.render_one(note);
        }
        info!(
            "event=notes_render module=ui status=ok count={}",
            notes.len()
        );
        notes.len()
    }

    /// Appends a single item without touching the rest of the list.
    pub fn render_one(&mut self, note: &Note) {
        self.view.append_item(note);
        self.rendered.push(note.clone());
    }

    /// Handles form submission.
    ///
    /// # Errors
    /// - Returns `ProjectionError::Repo` when the note could not be persisted;
    ///   in that case nothing is rendered and the inputs keep their text.
    pub fn on_submit(&mut self, title: &str, body: &str) -> Result<SubmitOutcome, ProjectionError> {
        if let Err(reason) = validate_input(title, body) {
            debug!("event=note_submit module=ui status=rejected reason={reason}");
            self.post_message(AlertKind::ValidationError);
            return Ok(SubmitOutcome::Rejected(reason));
        }

        let existing = self.store.load_all()?;
        self.ids.observe(&existing);
        self.ids.observe(&self.rendered);
        let note = Note {
            title: title.to_string(),
            body: body.to_string(),
            id: self.ids.next_id(),
        };

        self.store.append(note.clone())?;
        self.render_one(&note);
        self.view.clear_inputs();
        self.post_message(AlertKind::Success);
        Ok(SubmitOutcome::Added(note))
    }

    /// Opens the detail modal for a rendered note.
    ///
    /// Returns `false` when no rendered item carries `id`.
    pub fn on_view_requested(&mut self, id: NoteId) -> bool {
        let Some(note) = self.rendered.iter().find(|note| note.id == id) else {
            return false;
        };
        self.modal.open(note.title.as_str(), note.body.as_str());
        self.view.show_modal(&note.title, &note.body);
        true
    }

    /// Closes the detail modal.
    pub fn on_close_requested(&mut self) {
        self.modal.close();
        self.view.hide_modal();
    }

    /// Removes a note from the store, then from the view.
    ///
    /// Returns how many stored notes were removed; an unknown id removes none.
    ///
    /// # Errors
    /// - Returns `ProjectionError::Repo` when the removal could not be
    ///   persisted; the item stays on screen and no message is posted.
    pub fn on_delete_requested(&mut self, id: NoteId) -> Result<usize, ProjectionError> {
        let removed = self.store.remove(id)?;
        self.view.remove_item(id);
        self.rendered.retain(|note| note.id != id);
        self.post_message(AlertKind::Removal);
        Ok(removed)
    }

    /// Dismisses one message before its deadline.
    ///
    /// Returns `false` when it was already gone.
    pub fn on_message_closed(&mut self, id: MessageId) -> bool {
        if !self.messages.dismiss(id) {
            return false;
        }
        self.view.remove_message(id);
        true
    }

    /// Dismisses every message whose deadline has passed.
    ///
    /// Returns the ids dismissed.
    pub fn tick(&mut self) -> Vec<MessageId> {
        let expired = self.messages.take_expired(self.clock.now());
        for id in &expired {
            self.view.remove_message(*id);
        }
        expired
    }

    fn post_message(&mut self, kind: AlertKind) {
        let message = self
            .messages
            .post(kind, self.clock.now(), self.dismiss_after);
        self.view.insert_message(message);
        self.view.focus_title();
    }
}
