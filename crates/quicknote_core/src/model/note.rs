//! Note domain model.
//!
//! # Responsibility
//! - Define the note record persisted in the storage slot.
//! - Validate form input before a note is created.
//! - Generate numeric ids that are monotonic per collection.
//!
//! # Invariants
//! - `title` and `body` are stored verbatim; whitespace is not trimmed.
//! - `NoteId` is always finite.
//! - `NoteIdGenerator` never returns an id at or below one it has observed.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Numeric note identifier, serialized as a JSON number.
///
/// Older collections carry random fractional ids in `[0, 1)`; new ids are
/// whole numbers handed out by [`NoteIdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NoteId(f64);

impl NoteId {
    /// Wraps a raw value, rejecting NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw numeric value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| serde::de::Error::custom("note id must be finite"))
    }
}

/// Error returned when id text cannot be turned back into a [`NoteId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteIdError(String);

impl Display for ParseNoteIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid note id `{}`", self.0)
    }
}

impl Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseNoteIdError(s.to_string()))
    }
}

/// Validation error for note form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title input is empty.
    EmptyTitle,
    /// Body input is empty.
    EmptyBody,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::EmptyBody => write!(f, "note body must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// Persisted note record.
///
/// Field order matches the stored layout written by earlier versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub id: NoteId,
}

impl Note {
    /// Creates a note after checking both fields are non-empty.
    ///
    /// Emptiness is exact: a title of `" "` is accepted.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        let note = Self {
            title: title.into(),
            body: body.into(),
            id,
        };
        note.validate()?;
        Ok(note)
    }

    /// Checks the non-empty invariant for title and body.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_input(&self.title, &self.body)
    }
}

/// Validates raw form input without building a note.
pub fn validate_input(title: &str, body: &str) -> Result<(), NoteValidationError> {
    if title.is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }
    if body.is_empty() {
        return Err(NoteValidationError::EmptyBody);
    }
    Ok(())
}

/// Largest integer an `f64` id holds exactly (2^53).
pub const MAX_EXACT_NOTE_ID: u64 = 1 << 53;

/// Monotonic id source for new notes.
///
/// Ids are whole numbers in `1..=MAX_EXACT_NOTE_ID`. Once a stored id sits at
/// or above the limit the counter cannot advance further, and the smallest
/// whole id not yet seen is handed out instead.
#[derive(Debug, Clone)]
pub struct NoteIdGenerator {
    next: u64,
    taken: BTreeSet<u64>,
}

impl Default for NoteIdGenerator {
    fn default() -> Self {
        Self {
            next: 1,
            taken: BTreeSet::new(),
        }
    }
}

impl NoteIdGenerator {
    /// Creates a generator already advanced past every id in `notes`.
    pub fn seeded_from(notes: &[Note]) -> Self {
        let mut generator = Self::default();
        generator.observe(notes);
        generator
    }

    /// Records the ids in `notes` and advances the counter past the largest.
    ///
    /// Never moves the counter backwards.
    pub fn observe(&mut self, notes: &[Note]) {
        for note in notes {
            let value = note.id.value();
            if value < 1.0 {
                continue;
            }
            if value.fract() == 0.0 && value <= MAX_EXACT_NOTE_ID as f64 {
                self.taken.insert(value as u64);
            }
            let candidate = if value.floor() < MAX_EXACT_NOTE_ID as f64 {
                value.floor() as u64 + 1
            } else {
                MAX_EXACT_NOTE_ID + 1
            };
            self.next = self.next.max(candidate);
        }
    }

    /// Returns a fresh id and advances the counter.
    pub fn next_id(&mut self) -> NoteId {
        let value = if self.next <= MAX_EXACT_NOTE_ID && !self.taken.contains(&self.next) {
            let value = self.next;
            self.next += 1;
            value
        } else {
            self.smallest_free()
        };
        self.taken.insert(value);
        NoteId(value as f64)
    }

    fn smallest_free(&self) -> u64 {
        let mut candidate = 1;
        for &used in &self.taken {
            if used != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::{
        validate_input, Note, NoteId, NoteIdGenerator, NoteValidationError, MAX_EXACT_NOTE_ID,
    };

    fn id(value: f64) -> NoteId {
        NoteId::new(value).unwrap()
    }

    #[test]
    fn note_id_rejects_non_finite_values() {
        assert!(NoteId::new(f64::NAN).is_none());
        assert!(NoteId::new(f64::INFINITY).is_none());
        assert!("NaN".parse::<NoteId>().is_err());
    }

    #[test]
    fn note_id_text_roundtrips_through_display() {
        let fractional = id(0.123_456_789);
        assert_eq!(fractional.to_string().parse::<NoteId>().unwrap(), fractional);
        assert_eq!(id(3.0).to_string(), "3");
    }

    #[test]
    fn validation_is_exact_emptiness() {
        assert_eq!(
            validate_input("", "body"),
            Err(NoteValidationError::EmptyTitle)
        );
        assert_eq!(
            validate_input("title", ""),
            Err(NoteValidationError::EmptyBody)
        );
        assert!(validate_input(" ", " ").is_ok());
        assert!(Note::new(id(1.0), "", "").is_err());
    }

    #[test]
    fn note_serializes_with_numeric_id() {
        let note = Note::new(id(0.5), "Groceries", "Milk, eggs").unwrap();
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"title":"Groceries","body":"Milk, eggs","id":0.5}"#);
    }

    #[test]
    fn generator_skips_past_observed_ids() {
        let notes = vec![
            Note::new(id(0.73), "a", "b").unwrap(),
            Note::new(id(4.0), "c", "d").unwrap(),
        ];
        let mut generator = NoteIdGenerator::seeded_from(&notes);
        assert_eq!(generator.next_id(), id(5.0));
        assert_eq!(generator.next_id(), id(6.0));

        generator.observe(&notes);
        assert_eq!(generator.next_id(), id(7.0));
    }

    #[test]
    fn generator_starts_at_one_for_legacy_fractional_ids() {
        let notes = vec![Note::new(id(0.99), "a", "b").unwrap()];
        let mut generator = NoteIdGenerator::seeded_from(&notes);
        assert_eq!(generator.next_id(), id(1.0));
    }

    #[test]
    fn generator_never_reissues_stored_id_at_precision_limit() {
        let stored = vec![Note::new(id(9_007_199_254_740_992.0), "a", "1").unwrap()];
        let mut generator = NoteIdGenerator::seeded_from(&stored);

        let first = generator.next_id();
        let second = generator.next_id();
        assert_ne!(first, stored[0].id);
        assert_eq!(first, id(1.0));
        assert_eq!(second, id(2.0));
    }

    #[test]
    fn generator_fills_gaps_once_counter_is_exhausted() {
        let stored = vec![
            Note::new(id(1.0), "a", "1").unwrap(),
            Note::new(id(3.0), "b", "2").unwrap(),
            Note::new(id(MAX_EXACT_NOTE_ID as f64), "c", "3").unwrap(),
        ];
        let mut generator = NoteIdGenerator::seeded_from(&stored);

        assert_eq!(generator.next_id(), id(2.0));
        assert_eq!(generator.next_id(), id(4.0));
    }

    #[test]
    fn generator_hands_out_the_last_exact_id() {
        let stored = vec![Note::new(id((MAX_EXACT_NOTE_ID - 1) as f64), "a", "1").unwrap()];
        let mut generator = NoteIdGenerator::seeded_from(&stored);

        assert_eq!(generator.next_id(), id(MAX_EXACT_NOTE_ID as f64));
        assert_eq!(generator.next_id(), id(1.0));
    }
}
