//! Flutter-facing bindings for Jotpad core.

pub mod api;
