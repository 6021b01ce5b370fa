//! Core renderer module - pure, deterministic, and testable
//!
//! This crate contains the map, the player, the ray caster, the shader and
//! the frame composer. It has no dependencies on terminals or input devices,
//! making it:
//!
//! - **Deterministic**: the same map, pose and config always produce the same frame
//! - **Testable**: every stage is a plain function or a small struct
//! - **Portable**: frames are glyph grids any presentation layer can draw
//!
//! # Module Structure
//!
//! - [`map`]: immutable tile grid, text layout parsing and the built-in map
//! - [`player`]: pose with rotation and all-or-nothing collision movement
//! - [`caster`]: fixed-step ray marching with corner seam detection
//! - [`shade`]: distance-to-glyph and row-to-glyph lookups
//! - [`compose`]: per-column frame assembly, minimap and status overlay
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{compose_frame, GlyphBuffer, Map, Player};
//! use tui_raycaster_types::RenderConfig;
//!
//! let map = Map::default();
//! let config = RenderConfig::default();
//! let mut player = Player::new(config.start);
//!
//! player.rotate(0.25);
//! player.try_move(&map, true, 0.5);
//!
//! let mut frame = GlyphBuffer::new(config.screen_width, config.screen_height);
//! compose_frame(&map, player.pose(), &config, 60.0, &mut frame);
//! assert!(frame.row_string(0).starts_with("X="));
//! ```

pub mod caster;
pub mod compose;
pub mod map;
pub mod player;
pub mod shade;

pub use tui_raycaster_types as types;

pub use caster::{cast, cast_ray, is_boundary, CastParams, HitResult, Ray};
pub use compose::{
    cast_columns, column_angle, compose_frame, split_rows, Glyph, GlyphBuffer, Tone,
};
pub use map::{Map, DEFAULT_LAYOUT};
pub use player::Player;
pub use shade::{floor_shade, wall_shade, FloorShade, WallShade};
