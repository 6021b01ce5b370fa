//! Frame composition: map + pose + config into a glyph buffer.
//!
//! This module is pure (no I/O). The buffer is overwritten completely on
//! every call, so callers can keep one around for the whole run.

use crate::caster::{cast, CastParams, HitResult};
use crate::map::Map;
use crate::shade::{floor_shade, wall_shade, FloorShade, WallShade};
use crate::types::{Pose, RenderConfig, PLAYER_CHAR};

/// Smallest distance used when projecting wall height.
pub const MIN_PROJECTION_DISTANCE: f32 = 1e-3;

/// What a glyph depicts; presentation layers pick colours from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Sky,
    Wall(WallShade),
    Floor(FloorShade),
    MapWall,
    MapOpen,
    Player,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tone: Tone,
}

impl Glyph {
    pub const fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::new(' ', Tone::Sky)
    }
}

/// Row-major grid of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl GlyphBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    /// Write a glyph; out-of-range writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Glyph::new(ch, tone));
            cx += 1;
        }
    }

    /// One row as a string, for tests and debugging.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}

/// Angle of the ray for screen column `x`.
pub fn column_angle(view_angle: f32, x: u16, width: u16, fov: f32) -> f32 {
    view_angle - fov / 2.0 + (x as f32 / width as f32) * fov
}

/// Last sky row and last wall row for a wall at `distance`.
///
/// Rows `y <= ceiling` are sky, `ceiling < y <= floor` wall, the rest floor.
/// Either value may fall outside the screen for very near or far walls.
pub fn split_rows(distance: f32, height: u16) -> (i32, i32) {
    let h = height as f32;
    let ceiling = (h / 2.0 - h / distance.max(MIN_PROJECTION_DISTANCE)) as i32;
    let floor = height as i32 - ceiling;
    (ceiling, floor)
}

/// Cast the ray for every column. Index `x` holds column `x`.
pub fn cast_columns(map: &Map, pose: Pose, config: &RenderConfig) -> Vec<HitResult> {
    let params = CastParams::from_config(config);
    (0..config.screen_width)
        .map(|x| {
            let angle = column_angle(pose.angle, x, config.screen_width, config.fov);
            cast(map, pose.x, pose.y, angle, params)
        })
        .collect()
}

/// Render one frame into `buf`, resizing it to the configured screen.
///
/// `fps` is only shown on the status line.
pub fn compose_frame(map: &Map, pose: Pose, config: &RenderConfig, fps: f32, buf: &mut GlyphBuffer) {
    if buf.width != config.screen_width || buf.height != config.screen_height {
        *buf = GlyphBuffer::new(config.screen_width, config.screen_height);
    }
    let width = config.screen_width;
    let height = config.screen_height;
    let params = CastParams::from_config(config);

    for x in 0..width {
        let angle = column_angle(pose.angle, x, width, config.fov);
        let hit = cast(map, pose.x, pose.y, angle, params);
        let shade = wall_shade(hit.distance, hit.boundary, config.max_depth, &config.wall_fractions);
        let wall = Glyph::new(shade.glyph(), Tone::Wall(shade));
        let (ceiling, floor) = split_rows(hit.distance, height);

        for y in 0..height {
            let row = y as i32;
            let glyph = if row <= ceiling {
                Glyph::default()
            } else if row <= floor {
                wall
            } else {
                let f = floor_shade(y, height, &config.floor_thresholds);
                Glyph::new(f.glyph(), Tone::Floor(f))
            };
            buf.set(x, y, glyph);
        }
    }

    draw_minimap(map, pose, buf);
    draw_status(pose, fps, buf);
}

fn draw_minimap(map: &Map, pose: Pose, buf: &mut GlyphBuffer) {
    for (y, row) in map.rows().enumerate() {
        let Ok(sy) = u16::try_from(y + 1) else {
            break;
        };
        for (x, kind) in row.iter().enumerate() {
            let Ok(sx) = u16::try_from(x) else {
                break;
            };
            let tone = if kind.is_wall() {
                Tone::MapWall
            } else {
                Tone::MapOpen
            };
            buf.set(sx, sy, Glyph::new(kind.as_char(), tone));
        }
    }

    let (cx, cy) = pose.cell();
    if let (Ok(px), Ok(py)) = (u16::try_from(cx), u16::try_from(cy + 1)) {
        buf.set(px, py, Glyph::new(PLAYER_CHAR, Tone::Player));
    }
}

fn draw_status(pose: Pose, fps: f32, buf: &mut GlyphBuffer) {
    let fps = if fps.is_finite() { fps } else { 0.0 };
    let line = format!(
        "X={:.2} Y={:.2} A={:.2} FPS={:.1}",
        pose.x,
        pose.y,
        pose.display_angle(),
        fps
    );
    buf.put_str(0, 0, &line, Tone::Status);
}
