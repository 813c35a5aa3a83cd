//! Search entry points.
//!
//! # Responsibility
//! - Keep query normalization and match rules inside core so every caller
//!   filters the same way.

pub mod filter;
