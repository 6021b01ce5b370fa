//! Terminal presentation module.
//!
//! Composed glyph frames are written straight to the terminal with crossterm,
//! each tone mapped to a colour on the way out. No widget or layout library is
//! involved.
//!
//! - [`scene_view`]: glyph tones to colours, plus the resize notice
//! - [`renderer`]: raw-mode terminal with changed-span diffing
//! - [`display`]: the frame loop's `Display` on top of the above

pub mod display;
pub mod renderer;
pub mod scene_view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use display::TerminalDisplay;
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use scene_view::{SceneView, Style};
