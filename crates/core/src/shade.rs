//! Distance and row shading.
//!
//! Walls get denser glyphs the closer they are; the floor gradient is keyed
//! on screen row only. Both are pure lookups against configured cutoffs.

/// Wall shade classes, nearest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WallShade {
    Solid,
    Dense,
    Medium,
    Light,
    Blank,
}

impl WallShade {
    pub fn glyph(&self) -> char {
        match self {
            WallShade::Solid => '█',
            WallShade::Dense => '▓',
            WallShade::Medium => '▒',
            WallShade::Light => '░',
            WallShade::Blank => ' ',
        }
    }
}

/// Floor shade classes, densest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FloorShade {
    Dense,
    Medium,
    Sparse,
    Faint,
    Blank,
}

impl FloorShade {
    pub fn glyph(&self) -> char {
        match self {
            FloorShade::Dense => '#',
            FloorShade::Medium => 'x',
            FloorShade::Sparse => '.',
            FloorShade::Faint => '-',
            FloorShade::Blank => ' ',
        }
    }
}

/// Shade for a wall hit at `distance`.
///
/// `fractions` are the cutoffs as fractions of `max_depth`; the first one is
/// inclusive, the rest exclusive. Seams are always blank.
pub fn wall_shade(distance: f32, boundary: bool, max_depth: f32, fractions: &[f32; 4]) -> WallShade {
    if boundary {
        return WallShade::Blank;
    }
    if distance <= max_depth * fractions[0] {
        WallShade::Solid
    } else if distance < max_depth * fractions[1] {
        WallShade::Dense
    } else if distance < max_depth * fractions[2] {
        WallShade::Medium
    } else if distance < max_depth * fractions[3] {
        WallShade::Light
    } else {
        WallShade::Blank
    }
}

/// Shade for floor row `row` of a screen `height` rows tall.
///
/// `b = 1 - (row - h/2) / (h/2)` is 1 at the horizon and 0 at the bottom edge.
pub fn floor_shade(row: u16, height: u16, thresholds: &[f32; 4]) -> FloorShade {
    let half = height as f32 / 2.0;
    if half <= 0.0 {
        return FloorShade::Blank;
    }
    let b = 1.0 - (row as f32 - half) / half;
    if b < thresholds[0] {
        FloorShade::Dense
    } else if b < thresholds[1] {
        FloorShade::Medium
    } else if b < thresholds[2] {
        FloorShade::Sparse
    } else if b < thresholds[3] {
        FloorShade::Faint
    } else {
        FloorShade::Blank
    }
}
