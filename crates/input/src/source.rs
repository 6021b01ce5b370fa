//! crossterm-backed [`InputSource`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Command;
use tui_raycaster_engine::InputSource;

/// Reads key presses from the terminal.
///
/// Releases are ignored; terminal auto-repeat counts as pressing again so
/// holding a key keeps walking.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => Ok(handle_key_event(key)),
                KeyEventKind::Release => Ok(None),
            },
            _ => Ok(None),
        }
    }
}
