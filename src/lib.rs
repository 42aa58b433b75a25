//! Terminal 2048 (workspace facade crate).
//!
//! This package re-exports the workspace member crates under one name so the
//! binary, integration tests, and benches can reach everything through
//! `tui_2048::{core, input, term, types}`.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
