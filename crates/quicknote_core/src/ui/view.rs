//! UI handles consumed by the list projection.
//!
//! # Responsibility
//! - Describe the surface the projection mutates: note list container, form,
//!   message slot, and detail modal.
//! - Provide a recording implementation for headless drivers and tests.

use crate::model::note::{Note, NoteId};
use crate::ui::message::{MessageId, TransientMessage};

/// Mutable UI surface injected into `ListProjection`.
pub trait NoteView {
    /// Appends one list item for `note` at the end of the container.
    fn append_item(&mut self, note: &Note);
    /// Removes the list item tagged with `id`. Returns whether one existed.
    fn remove_item(&mut self, id: NoteId) -> bool;
    /// Clears the title and body inputs.
    fn clear_inputs(&mut self);
    /// Moves focus to the title input.
    fn focus_title(&mut self);
    /// Inserts a message element just before the form.
    fn insert_message(&mut self, message: &TransientMessage);
    /// Removes a message element. Unknown ids are ignored.
    fn remove_message(&mut self, id: MessageId) -> bool;
    /// Shows the detail modal with the given content.
    fn show_modal(&mut self, title: &str, body: &str);
    /// Hides the detail modal.
    fn hide_modal(&mut self);
}

/// View that records what is on screen instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub items: Vec<Note>,
    pub messages: Vec<TransientMessage>,
    pub modal: Option<(String, String)>,
    pub inputs_cleared: usize,
    pub title_focused: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the rendered items in display order.
    pub fn item_ids(&self) -> Vec<NoteId> {
        self.items.iter().map(|note| note.id).collect()
    }
}

impl NoteView for RecordingView {
    fn append_item(&mut self, note: &Note) {
        self.items.push(note.clone());
    }

    fn remove_item(&mut self, id: NoteId) -> bool {
        let before = self.items.len();
        self.items.retain(|note| note.id != id);
        before != self.items.len()
    }

    fn clear_inputs(&mut self) {
        self.inputs_cleared += 1;
    }

    fn focus_title(&mut self) {
        self.title_focused += 1;
    }

    fn insert_message(&mut self, message: &TransientMessage) {
        self.messages.push(message.clone());
    }

    fn remove_message(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|message| message.id != id);
        before != self.messages.len()
    }

    fn show_modal(&mut self, title: &str, body: &str) {
        self.modal = Some((title.to_string(), body.to_string()));
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }
}
