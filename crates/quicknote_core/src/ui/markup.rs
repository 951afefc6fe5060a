//! HTML fragments for note items and messages, plus a view that keeps them.
//!
//! Class names follow the widget stylesheet (`note`, `note__title`, ...).
//! User text is always escaped before interpolation.

use crate::model::note::{Note, NoteId};
use crate::ui::message::{MessageId, TransientMessage};
use crate::ui::view::NoteView;

/// Escapes text for use inside HTML element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders one list item with its hidden id, content, and action buttons.
pub fn note_item_html(note: &Note) -> String {
    format!(
        concat!(
            "<div class=\"note\">",
            "<span hidden>{id}</span>",
            "<h2 class=\"note__title\">{title}</h2>",
            "<p class=\"note__body\">{body}</p>",
            "<div class=\"note__btns\">",
            "<button class=\"note__btn note__view\">View Details</button>",
            "<button class=\"note__btn note__delete\">Delete Note</button>",
            "</div>",
            "</div>"
        ),
        id = note.id,
        title = escape_html(&note.title),
        body = escape_html(&note.body),
    )
}

/// Renders a feedback message element.
pub fn message_html(message: &TransientMessage) -> String {
    format!(
        "<div class=\"message {}\">{}</div>",
        message.kind.css_class(),
        escape_html(&message.text)
    )
}

/// View that keeps the widget markup as rendered HTML fragments.
#[derive(Debug, Default)]
pub struct HtmlView {
    items: Vec<(NoteId, String)>,
    messages: Vec<(MessageId, String)>,
    modal: Option<(String, String)>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the widget: messages before the form, the note list, the modal.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for (_, message) in &self.messages {
            html.push_str(message);
        }
        html.push_str(concat!(
            "<form>",
            "<input id=\"title\" type=\"text\">",
            "<textarea id=\"note\"></textarea>",
            "<button type=\"submit\">Add Note</button>",
            "</form>"
        ));
        html.push_str("<div class=\"note-container\">");
        for (_, item) in &self.items {
            html.push_str(item);
        }
        html.push_str("</div>");

        let (active, title, body) = match &self.modal {
            Some((title, body)) => (" active", escape_html(title), escape_html(body)),
            None => ("", String::new(), String::new()),
        };
        html.push_str(&format!(
            concat!(
                "<div class=\"modal-container{active}\">",
                "<h2 class=\"modal__title\">{title}</h2>",
                "<p class=\"modal__body\">{body}</p>",
                "<button class=\"modal__btn\">Close</button>",
                "</div>"
            ),
            active = active,
            title = title,
            body = body,
        ));
        html
    }
}

impl NoteView for HtmlView {
    fn append_item(&mut self, note: &Note) {
        self.items.push((note.id, note_item_html(note)));
    }

    fn remove_item(&mut self, id: NoteId) -> bool {
        let before = self.items.len();
        self.items.retain(|(item_id, _)| *item_id != id);
        before != self.items.len()
    }

    fn clear_inputs(&mut self) {}

    fn focus_title(&mut self) {}

    fn insert_message(&mut self, message: &TransientMessage) {
        self.messages.push((message.id, message_html(message)));
    }

    fn remove_message(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|(message_id, _)| *message_id != id);
        before != self.messages.len()
    }

    fn show_modal(&mut self, title: &str, body: &str) {
        self.modal = Some((title.to_string(), body.to_string()));
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_html, message_html, note_item_html, HtmlView};
    use crate::model::note::{Note, NoteId};
    use crate::ui::message::{AlertKind, MessageBoard, DEFAULT_DISMISS_AFTER};
    use crate::ui::view::NoteView;
    use std::time::Instant;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn note_item_carries_hidden_id_and_escaped_text() {
        let note = Note::new(NoteId::new(7.0).unwrap(), "<script>", "a & b").unwrap();
        let html = note_item_html(&note);
        assert!(html.contains("<span hidden>7</span>"));
        assert!(html.contains("<h2 class=\"note__title\">&lt;script&gt;</h2>"));
        assert!(html.contains("<p class=\"note__body\">a &amp; b</p>"));
        assert!(html.contains("note__view"));
        assert!(html.contains("note__delete"));
    }

    #[test]
    fn message_uses_kind_class() {
        let mut board = MessageBoard::new();
        let message = board
            .post(AlertKind::Removal, Instant::now(), DEFAULT_DISMISS_AFTER)
            .clone();
        assert_eq!(
            message_html(&message),
            "<div class=\"message remove-message\">Your note was permanently deleted.</div>"
        );
    }

    #[test]
    fn html_view_tracks_items_messages_and_modal() {
        let mut view = HtmlView::new();
        let note = Note::new(NoteId::new(2.0).unwrap(), "Trip", "Pack").unwrap();
        let mut board = MessageBoard::new();
        let message = board
            .post(AlertKind::Success, Instant::now(), DEFAULT_DISMISS_AFTER)
            .clone();

        view.append_item(&note);
        view.insert_message(&message);
        view.show_modal("Trip", "Pack");
        let html = view.to_html();
        assert!(html.starts_with("<div class=\"message success-message\">"));
        assert!(html.contains("<span hidden>2</span>"));
        assert!(html.contains("<div class=\"modal-container active\">"));

        assert!(view.remove_message(message.id));
        assert!(view.remove_item(note.id));
        assert!(!view.remove_item(note.id));
        view.hide_modal();
        let html = view.to_html();
        assert!(!html.contains("message success-message"));
        assert!(!html.contains("class=\"note\""));
        assert!(html.contains("<div class=\"modal-container\">"));
    }
}
