//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (ray casting, frame composition, terminal presentation, tests).
//!
//! # Coordinates
//!
//! Map space uses cell units:
//!
//! - **x**: column, grows to the right (0..width)
//! - **y**: row, grows downwards (0..height)
//! - **angle**: radians; a facing of `a` looks along `(sin a, cos a)`, so
//!   angle 0 faces +y ("south" on the minimap)
//!
//! # Render Defaults
//!
//! | Field | Value | Description |
//! |-------|-------|-------------|
//! | `screen_width` | 120 | Columns, one ray per column |
//! | `screen_height` | 40 | Rows |
//! | `fov` | π/4 | Total horizontal field of view |
//! | `max_depth` | 16.0 | Render distance in cells |
//! | `step` | 0.1 | Ray marching increment |
//! | `boundary_tolerance` | 0.01 | Corner seam angle in radians |
//! | `angular_speed` | 2.5 | Radians per second while turning |
//! | `linear_speed` | 5.0 | Cells per second while walking |
//! | `target_fps` | 60 | Frame cap, 0 disables pacing |
//!
//! `max_depth / step` may not exceed [`MAX_MARCH_STEPS`].
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{CellKind, RenderConfig};
//!
//! assert_eq!(CellKind::from_char('#'), Some(CellKind::Wall));
//!
//! let config = RenderConfig::default();
//! assert_eq!((config.screen_width, config.screen_height), (120, 40));
//! ```

use std::f32::consts::{PI, TAU};

use serde::Deserialize;

/// Glyph used for a wall cell in map text and on the minimap.
pub const WALL_CHAR: char = '#';

/// Glyph used for an open cell in map text and on the minimap.
pub const OPEN_CHAR: char = '.';

/// Minimap marker for the player's cell.
pub const PLAYER_CHAR: char = 'P';

/// Most samples a single ray may take (`max_depth / step`).
pub const MAX_MARCH_STEPS: u32 = 1_000_000;

/// Kind of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Open,
    Wall,
}

impl CellKind {
    /// Parse a map text character.
    ///
    /// ```
    /// use tui_raycaster_types::CellKind;
    ///
    /// assert_eq!(CellKind::from_char('.'), Some(CellKind::Open));
    /// assert_eq!(CellKind::from_char('#'), Some(CellKind::Wall));
    /// assert_eq!(CellKind::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            WALL_CHAR => Some(CellKind::Wall),
            OPEN_CHAR => Some(CellKind::Open),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CellKind::Open => OPEN_CHAR,
            CellKind::Wall => WALL_CHAR,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, CellKind::Wall)
    }
}

/// Camera position and facing.
///
/// The angle is never normalized. Every consumer goes through `sin`/`cos`,
/// so it may grow without bound; use [`Pose::display_angle`] when showing it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Angle reduced into `[0, 2π)`.
    pub fn display_angle(&self) -> f32 {
        self.angle.rem_euclid(TAU)
    }

    /// Integer cell containing the position.
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Discrete per-frame commands from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn counter-clockwise on the minimap
    RotateLeft,
    /// Turn clockwise on the minimap
    RotateRight,
    /// Walk along the facing direction
    MoveForward,
    /// Walk against the facing direction
    MoveBackward,
    /// Leave the frame loop
    Quit,
}

/// Rendering and movement configuration, fixed for the whole run.
///
/// Deserializes from JSON; omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    /// Total horizontal field of view in radians.
    pub fov: f32,
    /// Render distance in cells; also the distance reported for misses.
    pub max_depth: f32,
    /// Ray marching increment in cells.
    pub step: f32,
    /// Angle (radians) under which a ray counts as grazing a wall corner.
    pub boundary_tolerance: f32,
    /// Wall shade cutoffs as fractions of `max_depth`, nearest first.
    pub wall_fractions: [f32; 4],
    /// Floor shade cutoffs on the normalized row position, densest first.
    pub floor_thresholds: [f32; 4],
    /// Radians per second.
    pub angular_speed: f32,
    /// Cells per second.
    pub linear_speed: f32,
    /// Frame cap; 0 polls input without waiting.
    pub target_fps: u32,
    pub start: Pose,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 120,
            screen_height: 40,
            fov: PI / 4.0,
            max_depth: 16.0,
            step: 0.1,
            boundary_tolerance: 0.01,
            wall_fractions: [0.25, 1.0 / 3.0, 0.5, 1.0],
            floor_thresholds: [0.25, 0.5, 0.75, 0.9],
            angular_speed: 2.5,
            linear_speed: 5.0,
            target_fps: 60,
            start: Pose::new(14.0, 12.0, 0.0),
        }
    }
}
