//! Frame loop driver.
//!
//! [`FrameLoop`] owns everything a frame needs (map, player, config and the
//! reusable glyph buffer) and threads it through the core renderer. Input and
//! output stay behind the [`InputSource`] and [`Display`] traits so the loop can
//! be driven by a terminal or by tests.
//!
//! One frame:
//!
//! 1. Measure elapsed time since the previous frame
//! 2. Apply the pending command (if any) scaled by elapsed time
//! 3. Compose the frame and hand it to the display
//! 4. Poll for the next command, waiting at most until the next frame is due
//!
//! While the display reports a size other than the configured screen, no frame
//! is composed; the display is asked to show a notice instead and the loop keeps
//! polling so the user can still quit.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use tui_raycaster_core::{compose_frame, GlyphBuffer, Map, Player};
use tui_raycaster_types::{Command, Pose, RenderConfig};

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

/// Poll interval while waiting for the display to be resized.
const SIZE_MISMATCH_POLL: Duration = Duration::from_millis(100);

/// Source of per-frame commands.
pub trait InputSource {
    /// Return the next command, waiting at most `timeout`.
    ///
    /// `Duration::ZERO` must return immediately. No input is `Ok(None)`.
    fn poll_command(&mut self, timeout: Duration) -> Result<Option<Command>>;
}

/// Sink for composed frames.
pub trait Display {
    /// Acquire the display before the first frame.
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Release the display. Called once after [`FrameLoop::run`] stops, even
    /// when `begin` or a frame failed.
    fn end(&mut self) -> Result<()> {
        Ok(())
    }

    /// Current drawable size as (columns, rows).
    fn size(&mut self) -> Result<(u16, u16)>;

    fn present(&mut self, frame: &GlyphBuffer) -> Result<()>;

    /// Tell the user the display must be resized to `required`.
    fn present_size_mismatch(&mut self, required: (u16, u16), actual: (u16, u16)) -> Result<()>;
}

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What happened in one [`FrameLoop::run_frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered,
    SizeMismatch,
    Quit,
}

pub struct FrameLoop {
    map: Map,
    player: Player,
    config: RenderConfig,
    frame: GlyphBuffer,
    pending: Option<Command>,
    size_ok: bool,
}

impl FrameLoop {
    /// Build the loop context. Fails when the start pose is not on an open cell.
    pub fn new(map: Map, config: RenderConfig) -> Result<Self> {
        let (cx, cy) = config.start.cell();
        if map.kind_at_or_wall(cx, cy).is_wall() {
            bail!(
                "frame loop: start position ({}, {}) is not an open cell",
                config.start.x,
                config.start.y
            );
        }
        let frame = GlyphBuffer::new(config.screen_width, config.screen_height);
        Ok(Self {
            player: Player::new(config.start),
            map,
            config,
            frame,
            pending: None,
            size_ok: true,
        })
    }

    pub fn pose(&self) -> Pose {
        self.player.pose()
    }

    pub fn frame(&self) -> &GlyphBuffer {
        &self.frame
    }

    /// Apply one command scaled by `elapsed`.
    pub fn apply(&mut self, command: Command, elapsed: Duration) -> Flow {
        let dt = elapsed.as_secs_f32();
        match command {
            Command::RotateLeft => self.player.rotate(-self.config.angular_speed * dt),
            Command::RotateRight => self.player.rotate(self.config.angular_speed * dt),
            Command::MoveForward => {
                self.player
                    .try_move(&self.map, true, self.config.linear_speed * dt);
            }
            Command::MoveBackward => {
                self.player
                    .try_move(&self.map, false, self.config.linear_speed * dt);
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Compose the current pose into the internal buffer.
    pub fn render(&mut self, elapsed: Duration) -> &GlyphBuffer {
        let secs = elapsed.as_secs_f32();
        let fps = if secs > 0.0 { 1.0 / secs } else { 0.0 };
        compose_frame(
            &self.map,
            self.player.pose(),
            &self.config,
            fps,
            &mut self.frame,
        );
        &self.frame
    }

    /// Apply an optional command and render, without any I/O.
    pub fn step(&mut self, elapsed: Duration, command: Option<Command>) -> Flow {
        if let Some(command) = command {
            if self.apply(command, elapsed) == Flow::Quit {
                return Flow::Quit;
            }
        }
        self.render(elapsed);
        Flow::Continue
    }

    fn frame_interval(&self) -> Duration {
        if self.config.target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / self.config.target_fps
        }
    }

    /// Run a single frame against real collaborators.
    ///
    /// `frame_start` is when this frame began; it bounds how long input
    /// polling may wait at the end of the frame.
    pub fn run_frame(
        &mut self,
        input: &mut impl InputSource,
        display: &mut impl Display,
        elapsed: Duration,
        frame_start: Instant,
    ) -> Result<FrameOutcome> {
        if self.pending == Some(Command::Quit) {
            return Ok(FrameOutcome::Quit);
        }

        let required = (self.config.screen_width, self.config.screen_height);
        let actual = display.size()?;
        if actual != required {
            if self.size_ok {
                log::warn!(
                    "display is {}x{}, need {}x{}; pausing frames",
                    actual.0,
                    actual.1,
                    required.0,
                    required.1
                );
                self.size_ok = false;
            }
            display.present_size_mismatch(required, actual)?;
            self.pending = input.poll_command(SIZE_MISMATCH_POLL)?;
            return Ok(match self.pending {
                Some(Command::Quit) => FrameOutcome::Quit,
                _ => FrameOutcome::SizeMismatch,
            });
        }
        if !self.size_ok {
            log::info!("display size restored; resuming frames");
            self.size_ok = true;
        }

        let command = self.pending.take();
        if self.step(elapsed, command) == Flow::Quit {
            return Ok(FrameOutcome::Quit);
        }
        display.present(&self.frame)?;
        log::trace!("frame presented in {:?}", frame_start.elapsed());

        let timeout = self.frame_interval().saturating_sub(frame_start.elapsed());
        self.pending = input.poll_command(timeout)?;
        if self.pending == Some(Command::Quit) {
            return Ok(FrameOutcome::Quit);
        }
        Ok(FrameOutcome::Rendered)
    }

    /// Run until a quit command arrives or a collaborator fails.
    ///
    /// The display is acquired first and always released afterwards; the
    /// first error wins.
    pub fn run(&mut self, input: &mut impl InputSource, display: &mut impl Display) -> Result<()> {
        let result = display.begin().and_then(|()| self.run_frames(input, display));
        let released = display.end();
        if let Err(err) = &released {
            log::error!("failed to release display: {err:#}");
        }
        result.and(released)
    }

    fn run_frames(&mut self, input: &mut impl InputSource, display: &mut impl Display) -> Result<()> {
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let elapsed = now.duration_since(last);
            last = now;

            if self.run_frame(input, display, elapsed, now)? == FrameOutcome::Quit {
                log::info!("quit requested");
                return Ok(());
            }
        }
    }
}
