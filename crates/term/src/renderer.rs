//! TerminalRenderer: writes glyph frames to a real terminal.
//!
//! The first frame (and any frame after a size change) clears the screen and
//! writes every row; after that only spans of changed glyphs are written.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{Glyph, GlyphBuffer};
use crate::scene_view::{SceneView, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<GlyphBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            out: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        log::info!("entering alternate screen");
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush_out()
    }

    /// Undo [`enter`](Self::enter). Safe to call when `enter` failed part way.
    pub fn exit(&mut self) -> Result<()> {
        log::info!("restoring terminal");
        self.out.clear();
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_out();
        terminal::disable_raw_mode()?;
        self.last = None;
        flushed
    }

    /// Write `frame`, styled by `view`, diffing against the last frame drawn.
    pub fn draw(&mut self, frame: &GlyphBuffer, view: &SceneView) -> Result<()> {
        self.out.clear();
        encode_frame_into(self.last.as_ref(), frame, view, &mut self.out)?;
        self.flush_out()?;

        match &mut self.last {
            Some(last) => last.clone_from(frame),
            None => self.last = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush_out(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no `prev`, or one of a different size, the screen is cleared and
/// every row written. Nothing touches stdout.
pub fn encode_frame_into(
    prev: Option<&GlyphBuffer>,
    next: &GlyphBuffer,
    view: &SceneView,
    out: &mut Vec<u8>,
) -> Result<()> {
    let width = next.width() as usize;
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }
    if width == 0 {
        return Ok(());
    }

    let mut pen = Pen::new(view);
    for (y, row) in next.glyphs().chunks(width).enumerate() {
        let y = y as u16;
        match prev {
            None => pen.write_span(out, row, 0, y)?,
            Some(prev) => {
                let old = &prev.glyphs()[y as usize * width..][..width];
                for span in changed_spans(old, row) {
                    pen.write_span(out, &row[span.clone()], span.start as u16, y)?;
                }
            }
        }
    }

    if pen.current.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Maximal ranges where `old` and `new` differ.
fn changed_spans<'a>(
    old: &'a [Glyph],
    new: &'a [Glyph],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old[x] == new[x] {
            x += 1;
        }
        if x == new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old[x] != new[x] {
            x += 1;
        }
        Some(start..x)
    })
}

/// Emits glyphs, switching style only when the tone's style changes.
struct Pen<'v> {
    view: &'v SceneView,
    current: Option<Style>,
}

impl<'v> Pen<'v> {
    fn new(view: &'v SceneView) -> Self {
        Self {
            view,
            current: None,
        }
    }

    fn write_span(&mut self, out: &mut Vec<u8>, glyphs: &[Glyph], x: u16, y: u16) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for glyph in glyphs {
            let style = self.view.style(glyph.tone);
            if self.current != Some(style) {
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(SetBackgroundColor(Color::Black))?;
                out.queue(SetForegroundColor(style.fg))?;
                if style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
                self.current = Some(style);
            }
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }
}
