//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose note list operations to Dart via FRB.
//! - Translate store errors into flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One `NoteBook` handle owns one session store; there is no global store.
//! - Note ids cross the boundary as `i64`.

use jotpad_core::{
    app_config, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, Note, NoteId, NoteService, StoreError,
};
use log::info;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Configured API base URL. Informational only.
#[flutter_rust_bridge::frb(sync)]
pub fn api_base_url() -> String {
    app_config().api_base_url().to_owned()
}

/// Note row shown by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Result envelope for add/update/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected note on success.
    pub note: Option<NoteItem>,
    /// `validation_failed` or `not_found` on failure.
    pub error_code: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note: Note) -> Self {
        Self {
            ok: true,
            note: Some(to_note_item(note)),
            error_code: None,
            message: message.into(),
        }
    }

    fn unknown_id(id: i64) -> Self {
        Self {
            ok: false,
            note: None,
            error_code: Some("not_found".to_string()),
            message: format!("note not found: {id}"),
        }
    }

    fn failure(err: StoreError) -> Self {
        Self {
            ok: false,
            note: None,
            error_code: Some(err.code().to_string()),
            message: err.to_string(),
        }
    }
}

/// Result envelope for list/search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    /// Matching notes, newest first.
    pub items: Vec<NoteItem>,
    /// Note count regardless of the query.
    pub total: u32,
    pub message: String,
}

/// Session handle owning the note list for one UI root.
///
/// FRB wraps opaque handles in a lock, so calls from Dart are serialized.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct NoteBook {
    service: NoteService,
}

impl NoteBook {
    /// Opens an empty note book.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        info!("event=notebook_open module=ffi status=ok seeded=false");
        Self::default()
    }

    /// Opens a note book holding the first-launch notes.
    #[flutter_rust_bridge::frb(sync)]
    pub fn with_welcome_notes() -> Self {
        info!("event=notebook_open module=ffi status=ok seeded=true");
        Self {
            service: NoteService::with_welcome_notes(),
        }
    }

    /// Creates a note from the edit dialog fields.
    ///
    /// # FFI contract
    /// - Blank title and content yields `ok=false`,
    ///   `error_code=validation_failed`; the UI may ignore it silently.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add(&mut self, title: String, content: String) -> NoteActionResponse {
        match self.service.create_note(title, content) {
            Ok(note) => NoteActionResponse::success("Note created.", note),
            Err(err) => NoteActionResponse::failure(err),
        }
    }

    /// Replaces title and content of one note.
    #[flutter_rust_bridge::frb(sync)]
    pub fn update(&mut self, id: i64, title: String, content: String) -> NoteActionResponse {
        let Some(note_id) = from_ffi_id(id) else {
            return NoteActionResponse::unknown_id(id);
        };
        match self.service.update_note(note_id, title, content) {
            Ok(note) => NoteActionResponse::success("Note updated.", note),
            Err(err) => NoteActionResponse::failure(err),
        }
    }

    /// Deletes one note after the UI confirmed the action.
    ///
    /// # FFI contract
    /// - `not_found` means the row is already gone; treat as a no-op.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete(&mut self, id: i64) -> NoteActionResponse {
        let Some(note_id) = from_ffi_id(id) else {
            return NoteActionResponse::unknown_id(id);
        };
        match self.service.delete_note(note_id) {
            Ok(note) => NoteActionResponse::success("Note deleted.", note),
            Err(err) => NoteActionResponse::failure(err),
        }
    }

    /// Returns the list to render for the current search text.
    #[flutter_rust_bridge::frb(sync)]
    pub fn filter(&self, query: String) -> NoteListResponse {
        let listed = self.service.list_notes(query.as_str());
        let message = if listed.items.is_empty() {
            "No notes.".to_string()
        } else {
            format!("Showing {} of {} note(s).", listed.items.len(), listed.total)
        };
        NoteListResponse {
            items: listed.items.into_iter().map(to_note_item).collect(),
            total: u32::try_from(listed.total).unwrap_or(u32::MAX),
            message,
        }
    }
}

// Negative ids were never assigned; they map to `None`.
fn from_ffi_id(id: i64) -> Option<NoteId> {
    NoteId::try_from(id).ok()
}

fn to_note_item(note: Note) -> NoteItem {
    NoteItem {
        id: i64::try_from(note.id).unwrap_or(i64::MAX),
        title: note.title,
        content: note.content,
    }
}
