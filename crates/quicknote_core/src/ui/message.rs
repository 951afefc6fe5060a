//! Transient feedback messages with independent auto-dismiss deadlines.
//!
//! # Invariants
//! - Every posted message gets its own id and deadline; there is no queue.
//! - Dismissing an unknown or already-dismissed id is a no-op.

use std::time::{Duration, Instant};
use uuid::Uuid;

/// Default lifetime of a feedback message.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

pub type MessageId = Uuid;

/// Severity of a feedback message; selects its style class and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// A note was added.
    Success,
    /// Form input was rejected.
    ValidationError,
    /// A note was permanently removed.
    Removal,
}

impl AlertKind {
    /// Style class carried by the rendered message element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success-message",
            Self::ValidationError => "alert-message",
            Self::Removal => "remove-message",
        }
    }

    /// User-facing text for this kind of message.
    pub fn text(self) -> &'static str {
        match self {
            Self::Success => "Note successfully added!",
            Self::ValidationError => "Please add both a title and a note.",
            Self::Removal => "Your note was permanently deleted.",
        }
    }
}

/// One visible feedback message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub id: MessageId,
    pub kind: AlertKind,
    pub text: String,
    pub expires_at: Instant,
}

/// Currently visible messages, oldest first.
#[derive(Debug, Default)]
pub struct MessageBoard {
    messages: Vec<TransientMessage>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a message that expires `lifetime` after `now`.
    pub fn post(&mut self, kind: AlertKind, now: Instant, lifetime: Duration) -> &TransientMessage {
        self.messages.push(TransientMessage {
            id: Uuid::new_v4(),
            kind,
            text: kind.text().to_string(),
            expires_at: now + lifetime,
        });
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    /// Removes and returns ids of messages whose deadline is at or before `now`.
    pub fn take_expired(&mut self, now: Instant) -> Vec<MessageId> {
        let mut expired = Vec::new();
        self.messages.retain(|message| {
            if message.expires_at <= now {
                expired.push(message.id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Dismisses one message early. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|message| message.id != id);
        before != self.messages.len()
    }

    pub fn visible(&self) -> &[TransientMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertKind, MessageBoard, DEFAULT_DISMISS_AFTER};
    use std::time::{Duration, Instant};

    #[test]
    fn messages_stack_and_expire_independently() {
        let start = Instant::now();
        let mut board = MessageBoard::new();
        let first = board.post(AlertKind::Success, start, DEFAULT_DISMISS_AFTER).id;
        let second = board
            .post(
                AlertKind::Removal,
                start + Duration::from_millis(1000),
                DEFAULT_DISMISS_AFTER,
            )
            .id;
        assert_ne!(first, second);
        assert_eq!(board.len(), 2);

        let expired = board.take_expired(start + Duration::from_millis(3000));
        assert_eq!(expired, vec![first]);
        assert_eq!(board.visible()[0].id, second);

        let expired = board.take_expired(start + Duration::from_millis(4000));
        assert_eq!(expired, vec![second]);
        assert!(board.is_empty());
    }

    #[test]
    fn dismissing_twice_is_noop() {
        let mut board = MessageBoard::new();
        let id = board
            .post(AlertKind::ValidationError, Instant::now(), DEFAULT_DISMISS_AFTER)
            .id;
        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert!(board.take_expired(Instant::now() + DEFAULT_DISMISS_AFTER).is_empty());
    }

    #[test]
    fn kinds_map_to_style_classes() {
        assert_eq!(AlertKind::Success.css_class(), "success-message");
        assert_eq!(AlertKind::ValidationError.css_class(), "alert-message");
        assert_eq!(AlertKind::Removal.css_class(), "remove-message");
    }
}
