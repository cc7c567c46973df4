//! Falling-block puzzle engine (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,types}` so drivers
//! and tests depend on a single package.

pub use blockfall_core as core;
pub use blockfall_types as types;
