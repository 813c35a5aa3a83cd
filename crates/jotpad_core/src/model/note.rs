//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the note list.
//! - Define the draft shape accepted by create/update entry points.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes afterwards.
//! - A draft is blank only when both fields are empty after trimming.

use serde::{Deserialize, Serialize};

/// Session-scoped note identifier.
///
/// Assigned by [`crate::NoteStore`]; starts at 1 and only grows.
pub type NoteId = u64;

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier, immutable after creation.
    pub id: NoteId,
    /// Free-text title. May be empty when `content` is not.
    pub title: String,
    /// Free-text body. May be empty when `title` is not.
    pub content: String,
}

impl Note {
    /// Builds a note with an already-assigned id.
    ///
    /// This constructor does not validate the draft; callers that accept user
    /// input go through [`crate::NoteStore::add`].
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Replaces title and content, keeping the identifier.
    pub fn apply(&mut self, draft: NoteDraft) {
        self.title = draft.title;
        self.content = draft.content;
    }
}

/// Title/content pair as entered in the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns `true` when both fields are empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}
