//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and exposes a
//! non-blocking [`TerminalInput`] that plugs into the frame loop.

pub mod map;
pub mod source;

pub use tui_raycaster_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::TerminalInput;
