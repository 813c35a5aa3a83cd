//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/update/delete/list entry points for UI-facing layers.
//! - Seed first-launch notes.
//! - Emit one metadata-only log event per mutation.
//!
//! # Invariants
//! - Every mutation goes through `NoteStore`, so store invariants hold.
//! - Log events never include titles, contents or search text.

use crate::model::note::{Note, NoteId};
use crate::search::filter::NoteQuery;
use crate::store::note_store::{NoteStore, StoreResult};
use log::{debug, info, warn};

const WELCOME_NOTES: [(&str, &str); 2] = [
    ("Welcome", "Start creating your notes!"),
    ("Tip", "Use the + button to add a new note."),
];

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResult {
    /// Matching notes, newest first.
    pub items: Vec<Note>,
    /// Normalized query that produced `items`.
    pub query: String,
    /// Number of notes in the store regardless of the query.
    pub total: usize,
}

/// Note service facade owning the session store.
#[derive(Debug, Default)]
pub struct NoteService {
    store: NoteStore,
}

impl NoteService {
    /// Creates a service over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing store.
    pub fn with_store(store: NoteStore) -> Self {
        Self { store }
    }

    /// Creates a service pre-populated with the first-launch notes.
    ///
    /// The listing starts as `[Tip, Welcome]` with ids 2 and 1.
    pub fn with_welcome_notes() -> Self {
        let mut store = NoteStore::new();
        for (title, content) in WELCOME_NOTES {
            if let Err(err) = store.add(title, content) {
                // Seed drafts are non-blank, so this is unreachable in practice.
                warn!(
                    "event=notes_seed module=service status=error error_code={}",
                    err.code()
                );
            }
        }
        info!(
            "event=notes_seed module=service status=ok count={}",
            store.len()
        );
        Self { store }
    }

    /// Creates one note at the top of the list.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let result = self.store.add(title, content);
        log_mutation("note_create", None, &result);
        result
    }

    /// Replaces title and content of one note, keeping its position.
    pub fn update_note(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let result = self.store.update(id, title, content);
        log_mutation("note_update", Some(id), &result);
        result
    }

    /// Deletes one note by id and returns it.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<Note> {
        let result = self.store.delete(id);
        log_mutation("note_delete", Some(id), &result);
        result
    }

    /// Lists notes matching raw search text.
    pub fn list_notes(&self, raw_query: &str) -> NotesListResult {
        let query = NoteQuery::new(raw_query);
        let items = self.store.filter_with(&query);
        debug!(
            "event=notes_list module=service status=ok query_empty={} hits={} total={}",
            query.is_empty(),
            items.len(),
            self.store.len()
        );
        NotesListResult {
            items,
            query: query.as_str().to_string(),
            total: self.store.len(),
        }
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.store.get(id)
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }
}

fn log_mutation(event: &str, requested_id: Option<NoteId>, result: &StoreResult<Note>) {
    match result {
        Ok(note) => info!(
            "event={} module=service status=ok note_id={}",
            event, note.id
        ),
        Err(err) => warn!(
            "event={} module=service status=error note_id={} error_code={}",
            event,
            requested_id.map_or_else(|| "none".to_string(), |id| id.to_string()),
            err.code()
        ),
    }
}
