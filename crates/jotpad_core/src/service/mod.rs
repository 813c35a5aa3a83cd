//! Core use-case services.
//!
//! # Responsibility
//! - Wrap store calls into use-case level APIs with diagnostics.
//! - Keep UI/FFI layers decoupled from store internals.

pub mod note_service;
