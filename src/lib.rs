//! TUI raycaster (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_raycaster::{core,engine,input,term,types}`
//! and adds the startup plumbing shared by the binary and tests: command line
//! parsing and configuration loading.

pub mod config;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
