//! CLI tests.

use std::path::PathBuf;

use crate::cli::args::{Args, Command};
use crate::cli::commands::{frames_to_settle, replay_sketch};
use crate::config::SketchConfig;

#[test]
fn test_no_args_shows_help() {
    let args = Args::parse_from(["tortuga"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_help_flags() {
    for flag in ["-h", "--help", "help"] {
        let args = Args::parse_from(["tortuga", flag]);
        assert_eq!(args.command, Command::Help);
    }
}

#[test]
fn test_version_flags() {
    for flag in ["-V", "--version", "version"] {
        let args = Args::parse_from(["tortuga", flag]);
        assert_eq!(args.command, Command::Version);
    }
}

#[test]
fn test_unknown_command_falls_back_to_help() {
    let args = Args::parse_from(["tortuga", "frobnicate"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_run_requires_path() {
    let args = Args::parse_from(["tortuga", "run"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_run_with_path() {
    let args = Args::parse_from(["tortuga", "run", "sketch.yaml"]);
    assert_eq!(
        args.command,
        Command::Run {
            sketch_path: PathBuf::from("sketch.yaml"),
            steps: None,
            json: false,
        }
    );
}

#[test]
fn test_run_with_steps_and_json() {
    let args = Args::parse_from(["tortuga", "run", "sketch.yaml", "--steps", "2.5", "--json"]);
    assert_eq!(
        args.command,
        Command::Run {
            sketch_path: PathBuf::from("sketch.yaml"),
            steps: Some(2.5),
            json: true,
        }
    );
}

#[test]
fn test_run_ignores_malformed_steps() {
    let args = Args::parse_from(["tortuga", "run", "sketch.yaml", "--steps", "lots"]);
    assert_eq!(
        args.command,
        Command::Run {
            sketch_path: PathBuf::from("sketch.yaml"),
            steps: None,
            json: false,
        }
    );
}

#[test]
fn test_validate_with_path() {
    let args = Args::parse_from(["tortuga", "validate", "sketch.yaml"]);
    assert_eq!(
        args.command,
        Command::Validate {
            sketch_path: PathBuf::from("sketch.yaml"),
        }
    );
}

#[test]
fn test_replay_sketch_runs_to_completion_by_default() {
    let config = SketchConfig::builder()
        .commands("F+F")
        .forward_px(10.0)
        .left_deg(90.0)
        .build()
        .unwrap();

    let (replay, commands) = replay_sketch(&config, None);
    assert_eq!(replay.executed, 3);
    assert!((replay.current().position.x - 10.0).abs() < 1e-9);
    assert!((replay.current().position.y - 10.0).abs() < 1e-9);
    // Two F segments plus the three marker ellipses.
    assert_eq!(commands.len(), 5);
}

#[test]
fn test_replay_sketch_honors_step_override() {
    let config = SketchConfig::builder()
        .commands("FFF")
        .forward_px(10.0)
        .build()
        .unwrap();

    let (replay, _) = replay_sketch(&config, Some(1.5));
    assert_eq!(replay.executed, 2);
    assert!((replay.current().position.x - 15.0).abs() < 1e-9);
}

#[test]
fn test_frames_to_settle_matches_speed() {
    let config = SketchConfig::builder()
        .commands("F+F")
        .speed(0.02)
        .build()
        .unwrap();
    assert_eq!(frames_to_settle(&config), 150);
}
