//! Session-scoped note storage.
//!
//! # Responsibility
//! - Hold the authoritative note list in memory.
//! - Return semantic errors (`NotFound`, `ValidationFailed`) instead of
//!   panicking on bad input.
//!
//! # Invariants
//! - Nothing is persisted; the store lives as long as its owner.

pub mod note_store;
