//! Startup loading of map and config files.

use std::fs;
use std::path::PathBuf;

use tui_raycaster::config::{load, parse_args, CliArgs};
use tui_raycaster::types::Pose;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tui-raycaster-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn no_arguments_uses_builtin_map_and_defaults() {
    let cli = parse_args(&[]).unwrap();
    assert_eq!(cli, CliArgs::default());
    let (map, config) = load(&cli).unwrap();
    assert_eq!((map.width(), map.height()), (16, 16));
    assert_eq!(config.start, Pose::new(14.0, 12.0, 0.0));
}

#[test]
fn map_and_config_files_are_applied() {
    let map_path = temp_file("room.txt", "#####\n#...#\n#...#\n#####\n");
    let config_path = temp_file(
        "room.json",
        r#"{ "screen_width": 60, "screen_height": 20, "start": { "x": 2.5, "y": 1.5, "angle": 0.0 } }"#,
    );
    let cli = CliArgs {
        map: Some(map_path.clone()),
        config: Some(config_path.clone()),
    };
    let (map, config) = load(&cli).unwrap();
    assert_eq!((map.width(), map.height()), (5, 4));
    assert_eq!((config.screen_width, config.screen_height), (60, 20));
    assert_eq!(config.max_depth, 16.0);

    let _ = fs::remove_file(map_path);
    let _ = fs::remove_file(config_path);
}

#[test]
fn start_outside_custom_map_is_rejected() {
    // Default start (14, 12) is off this small map.
    let map_path = temp_file("tiny.txt", "...\n...\n");
    let cli = CliArgs {
        map: Some(map_path.clone()),
        config: None,
    };
    assert!(load(&cli).is_err());
    let _ = fs::remove_file(map_path);
}

#[test]
fn missing_map_file_names_the_path() {
    let cli = CliArgs {
        map: Some(PathBuf::from("/definitely/not/here.txt")),
        config: None,
    };
    let err = load(&cli).unwrap_err();
    assert!(format!("{:#}", err).contains("/definitely/not/here.txt"));
}
