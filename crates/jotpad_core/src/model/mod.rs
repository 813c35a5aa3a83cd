//! Note domain model.
//!
//! # Responsibility
//! - Define the data structures shared by store, service and FFI layers.
//!
//! # Invariants
//! - Every note is identified by a store-assigned `NoteId`.
//! - Deletion removes the note outright; there are no tombstones.

pub mod note;
