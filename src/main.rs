//! Terminal raycaster (default binary).
//!
//! Walks a first-person view through a tile map: `w`/`s` to walk, `a`/`d` to
//! turn, `q` to quit. Set `RAYCASTER_LOG=info` (and redirect stderr) for logs.

use anyhow::Result;

use tui_raycaster::config::{load, parse_args};
use tui_raycaster::engine::FrameLoop;
use tui_raycaster::input::TerminalInput;
use tui_raycaster::term::{SceneView, TerminalDisplay, TerminalRenderer};

fn main() -> Result<()> {
    pretty_env_logger::init_custom_env("RAYCASTER_LOG");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let (map, config) = load(&cli)?;
    log::info!(
        "starting {}x{} view on a {}x{} map",
        config.screen_width,
        config.screen_height,
        map.width(),
        map.height()
    );
    let mut frame_loop = FrameLoop::new(map, config)?;

    let mut display = TerminalDisplay::new(TerminalRenderer::new(), SceneView::default());
    let mut input = TerminalInput::new();

    // Enters the terminal first and restores it on every exit path.
    let result = frame_loop.run(&mut input, &mut display);
    if let Err(err) = &result {
        log::error!("frame loop failed: {err:#}");
    }
    result
}
