//! Terminal implementation of the frame loop's [`Display`].

use anyhow::Result;

use crate::core::GlyphBuffer;
use crate::renderer::TerminalRenderer;
use crate::scene_view::SceneView;
use tui_raycaster_engine::Display;

/// Styles glyph frames with a [`SceneView`] and writes them through a
/// [`TerminalRenderer`]. The frame loop enters and restores the terminal
/// through [`Display::begin`] and [`Display::end`].
pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: SceneView,
    notice: GlyphBuffer,
}

impl TerminalDisplay {
    pub fn new(renderer: TerminalRenderer, view: SceneView) -> Self {
        Self {
            renderer,
            view,
            notice: GlyphBuffer::new(0, 0),
        }
    }
}

impl Display for TerminalDisplay {
    fn begin(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    fn end(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn size(&mut self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }

    fn present(&mut self, frame: &GlyphBuffer) -> Result<()> {
        self.renderer.draw(frame, &self.view)
    }

    fn present_size_mismatch(&mut self, required: (u16, u16), actual: (u16, u16)) -> Result<()> {
        self.view.size_notice_into(required, actual, &mut self.notice);
        self.renderer.draw(&self.notice, &self.view)
    }
}
