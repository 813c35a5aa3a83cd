//! Core domain logic for Jotpad.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use config::{app_config, AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteDraft, NoteId};
pub use search::filter::NoteQuery;
pub use service::note_service::{NoteService, NotesListResult};
pub use store::note_store::{NoteStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
