//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,engine,types}` so hosts
//! and integration tests depend on a single package.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;
