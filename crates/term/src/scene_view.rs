//! SceneView: colour scheme for glyph tones, plus the resize notice.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::{FloorShade, Glyph, GlyphBuffer, Tone, WallShade};

const WALL: (u8, u8, u8) = (225, 215, 190);
const FLOOR: (u8, u8, u8) = (120, 150, 110);
const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// Foreground styling for one glyph; the background is always black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    const fn plain(fg: Color) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }
}

/// Picks terminal colours for glyph tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneView {
    /// Draw the minimap and status line in bold.
    pub bold_overlay: bool,
}

impl Default for SceneView {
    fn default() -> Self {
        Self { bold_overlay: true }
    }
}

impl SceneView {
    pub fn style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Sky => Style::plain(Color::Rgb {
                r: 220,
                g: 220,
                b: 220,
            }),
            Tone::Wall(shade) => Style::plain(wall_color(shade)),
            Tone::Floor(shade) => Style::plain(floor_color(shade)),
            Tone::MapWall => self.overlay(rgb((170, 170, 190))),
            Tone::MapOpen => Style {
                dim: true,
                ..Style::plain(rgb((110, 110, 120)))
            },
            Tone::Player => self.overlay(rgb((255, 90, 90))),
            Tone::Status => self.overlay(rgb((240, 240, 240))),
        }
    }

    /// Fill `notice` with the resize request, sized to the `actual` screen.
    pub fn size_notice_into(
        &self,
        required: (u16, u16),
        actual: (u16, u16),
        notice: &mut GlyphBuffer,
    ) {
        if (notice.width(), notice.height()) != actual {
            *notice = GlyphBuffer::new(actual.0, actual.1);
        } else {
            notice.fill(Glyph::default());
        }

        let first = format!(
            "Terminal size is incorrect. Please resize your terminal to {}*{}.",
            required.0, required.1
        );
        let second = format!("Current dimensions are {}*{}. Press q to quit.", actual.0, actual.1);
        notice.put_str(0, 0, &first, Tone::Status);
        notice.put_str(0, 1, &second, Tone::Sky);
    }

    fn overlay(&self, fg: Color) -> Style {
        Style {
            bold: self.bold_overlay,
            ..Style::plain(fg)
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// `base` dimmed to `pct` percent brightness.
fn dimmed(base: (u8, u8, u8), pct: u16) -> Color {
    let scale = |c: u8| ((c as u16 * pct) / 100) as u8;
    rgb((scale(base.0), scale(base.1), scale(base.2)))
}

fn wall_color(shade: WallShade) -> Color {
    match shade {
        WallShade::Solid => rgb(WALL),
        WallShade::Dense => dimmed(WALL, 85),
        WallShade::Medium => dimmed(WALL, 70),
        WallShade::Light => dimmed(WALL, 55),
        WallShade::Blank => BLACK,
    }
}

fn floor_color(shade: FloorShade) -> Color {
    match shade {
        FloorShade::Dense => rgb(FLOOR),
        FloorShade::Medium => dimmed(FLOOR, 85),
        FloorShade::Sparse => dimmed(FLOOR, 70),
        FloorShade::Faint => dimmed(FLOOR, 55),
        FloorShade::Blank => BLACK,
    }
}
