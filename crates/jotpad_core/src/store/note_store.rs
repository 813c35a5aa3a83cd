//! In-memory note store.
//!
//! # Responsibility
//! - Own the canonical, ordered note collection for one app session.
//! - Assign note identifiers.
//! - Answer filtered list queries with owned snapshots.
//!
//! # Invariants
//! - Notes are ordered most-recently-added first; `update` never reorders.
//! - Ids are pairwise distinct and a new id is strictly greater than every id
//!   assigned before it in this store, including ids of deleted notes.
//! - `add` rejects drafts whose title and content are both blank.
//! - Read paths never mutate the collection.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::search::filter::NoteQuery;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Expected, recoverable store failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Both title and content are empty after trimming.
    ValidationFailed,
    /// No note with this id is present.
    NotFound(NoteId),
}

impl StoreError {
    /// Stable machine-readable code for logs and FFI envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "validation_failed",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed => write!(f, "note title and content cannot both be empty"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered in-memory note collection.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    // Index 0 is the newest note.
    notes: Vec<Note>,
    last_assigned: NoteId,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note at the front of the list.
    ///
    /// # Errors
    /// - `StoreError::ValidationFailed` when both fields trim to empty. The
    ///   store is left unchanged.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let draft = NoteDraft::new(title, content);
        if draft.is_blank() {
            return Err(StoreError::ValidationFailed);
        }

        let id = self.next_id();
        let note = Note::new(id, draft.title, draft.content);
        self.notes.insert(0, note.clone());
        self.last_assigned = id;
        Ok(note)
    }

    /// Replaces title and content of an existing note in place.
    ///
    /// Position and id are preserved. Blank drafts are accepted here; the
    /// empty-field rule applies to creation only.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` is absent. Nothing changes.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.apply(NoteDraft::new(title, content));
        Ok(note.clone())
    }

    /// Removes one note and returns it.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` is absent. Nothing changes.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<Note> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.notes.remove(index))
    }

    /// Returns notes matching `query`, newest first.
    ///
    /// A blank query returns every note. The result is an owned snapshot and
    /// is not affected by later mutations.
    pub fn filter(&self, query: &str) -> Vec<Note> {
        self.filter_with(&NoteQuery::new(query))
    }

    /// Same as [`NoteStore::filter`] with a pre-normalized query.
    pub fn filter_with(&self, query: &NoteQuery) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| query.matches(note))
            .cloned()
            .collect()
    }

    /// Full ordered snapshot, newest first.
    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Id the next successful `add` will assign.
    pub fn next_id(&self) -> NoteId {
        let max_present = self.notes.iter().map(|note| note.id).max().unwrap_or(0);
        max_present.max(self.last_assigned) + 1
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}
