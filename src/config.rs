use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use crate::core::Map;
use crate::types::{RenderConfig, MAX_MARCH_STEPS};

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub map: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub const USAGE: &str = "usage: tui-raycaster [--map PATH] [--config PATH]";

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--map" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("args: missing value for --map"))?;
                out.map = Some(PathBuf::from(v));
            }
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("args: missing value for --config"))?;
                out.config = Some(PathBuf::from(v));
            }
            other => {
                return Err(anyhow!("args: unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }
    Ok(out)
}

/// Parse a JSON config; missing fields keep their defaults.
pub fn parse_config(text: &str) -> Result<RenderConfig> {
    serde_json::from_str(text).map_err(|e| anyhow!("config: invalid JSON: {}", e))
}

pub fn load_config(path: &Path) -> Result<RenderConfig> {
    log::info!("loading config at {}", path.display());
    let text = read_to_string(path)
        .with_context(|| format!("config: failed to read {}", path.display()))?;
    parse_config(&text)
}

/// Reject configurations the renderer cannot draw sensibly.
pub fn validate(config: &RenderConfig, map: &Map) -> Result<()> {
    if config.screen_width == 0 || config.screen_height == 0 {
        bail!(
            "config: screen must be non-empty, got {}x{}",
            config.screen_width,
            config.screen_height
        );
    }
    if !(config.fov > 0.0 && config.fov < std::f32::consts::TAU) {
        bail!("config: fov must be in (0, 2π), got {}", config.fov);
    }
    for (name, v) in [
        ("max_depth", config.max_depth),
        ("step", config.step),
        ("boundary_tolerance", config.boundary_tolerance),
        ("angular_speed", config.angular_speed),
        ("linear_speed", config.linear_speed),
    ] {
        if !(v > 0.0 && v.is_finite()) {
            bail!("config: {} must be positive, got {}", name, v);
        }
    }
    if config.step >= config.max_depth {
        bail!(
            "config: step {} must be smaller than max_depth {}",
            config.step,
            config.max_depth
        );
    }
    if config.max_depth / config.step > MAX_MARCH_STEPS as f32 {
        bail!(
            "config: step {} is too small for max_depth {} (at most {} samples per ray)",
            config.step,
            config.max_depth,
            MAX_MARCH_STEPS
        );
    }
    if !is_ascending(&config.wall_fractions) {
        bail!(
            "config: wall_fractions must be ascending, got {:?}",
            config.wall_fractions
        );
    }
    if !is_ascending(&config.floor_thresholds) {
        bail!(
            "config: floor_thresholds must be ascending, got {:?}",
            config.floor_thresholds
        );
    }

    let (cx, cy) = config.start.cell();
    if map.kind_at_or_wall(cx, cy).is_wall() {
        bail!(
            "config: start ({}, {}) is inside a wall or off the {}x{} map",
            config.start.x,
            config.start.y,
            map.width(),
            map.height()
        );
    }
    if map.width() > config.screen_width as usize || map.height() + 1 > config.screen_height as usize {
        log::warn!(
            "{}x{} map does not fit on a {}x{} screen; the minimap will be clipped",
            map.width(),
            map.height(),
            config.screen_width,
            config.screen_height
        );
    }
    Ok(())
}

fn is_ascending(values: &[f32; 4]) -> bool {
    values.iter().all(|v| v.is_finite()) && values.windows(2).all(|w| w[0] <= w[1])
}

/// Resolve the map and configuration named on the command line.
pub fn load(args: &CliArgs) -> Result<(Map, RenderConfig)> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    let map = match &args.map {
        Some(path) => Map::load(path)?,
        None => Map::default(),
    };
    validate(&config, &map)?;
    Ok((map, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pose;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_map_and_config_flags() {
        let parsed = parse_args(&args(&["--map", "a.txt", "--config", "c.json"])).unwrap();
        assert_eq!(parsed.map, Some(PathBuf::from("a.txt")));
        assert_eq!(parsed.config, Some(PathBuf::from("c.json")));
    }

    #[test]
    fn rejects_unknown_and_dangling_flags() {
        assert!(parse_args(&args(&["--fast"])).is_err());
        assert!(parse_args(&args(&["--map"])).is_err());
    }

    #[test]
    fn default_config_is_valid_for_default_map() {
        validate(&RenderConfig::default(), &Map::default()).unwrap();
    }

    #[test]
    fn start_in_wall_is_rejected() {
        let config = RenderConfig {
            start: Pose::new(0.5, 0.5, 0.0),
            ..RenderConfig::default()
        };
        let err = validate(&config, &Map::default()).unwrap_err();
        assert!(err.to_string().contains("inside a wall"));
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let config = RenderConfig {
            floor_thresholds: [0.5, 0.25, 0.75, 0.9],
            ..RenderConfig::default()
        };
        assert!(validate(&config, &Map::default()).is_err());
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let config = RenderConfig {
            step: 0.0,
            ..RenderConfig::default()
        };
        assert!(validate(&config, &Map::default()).is_err());
    }

    #[test]
    fn tiny_step_is_rejected() {
        let config = RenderConfig {
            step: 1e-9,
            ..RenderConfig::default()
        };
        let err = validate(&config, &Map::default()).unwrap_err();
        assert!(err.to_string().contains("too small"));

        // Fine but bounded: 160k samples per ray.
        let config = RenderConfig {
            step: 1e-4,
            ..RenderConfig::default()
        };
        validate(&config, &Map::default()).unwrap();
    }

    #[test]
    fn parse_config_reports_bad_json() {
        assert!(parse_config("{ not json").is_err());
        assert_eq!(parse_config("{}").unwrap(), RenderConfig::default());
    }
}
