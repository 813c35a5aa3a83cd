//! Substring filter over in-memory notes.
//!
//! # Responsibility
//! - Normalize raw search-box text into a comparable query.
//! - Decide whether one note matches a query.
//!
//! # Invariants
//! - Matching is case-insensitive and checks `title` OR `content`.
//! - A blank query matches every note.

use crate::model::note::Note;

/// Normalized search query.
///
/// Holds the trimmed, lower-cased needle so repeated matching over a list does
/// not re-normalize the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    needle: String,
}

impl NoteQuery {
    /// Trims and lower-cases raw search text.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Returns `true` when the query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Normalized query text.
    pub fn as_str(&self) -> &str {
        self.needle.as_str()
    }

    /// Returns whether `note` should appear in the filtered list.
    pub fn matches(&self, note: &Note) -> bool {
        if self.is_empty() {
            return true;
        }

        contains_folded(&note.title, &self.needle) || contains_folded(&note.content, &self.needle)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
