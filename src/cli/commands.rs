//! CLI command execution.

use std::path::Path;
use std::process::ExitCode;

use crate::animation::AnimationDriver;
use crate::cli::args::{Args, Command};
use crate::cli::output;
use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::interpreter::{branch_readouts, interpret, Replay};
use crate::program::ParamTable;
use crate::render::{Recorder, RenderCommand};

/// Execute a parsed CLI command.
#[must_use]
pub fn run_cli(args: &Args) -> ExitCode {
    match &args.command {
        Command::Run {
            sketch_path,
            steps,
            json,
        } => match run_sketch(sketch_path, *steps, *json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        },
        Command::Validate { sketch_path } => match validate_sketch(sketch_path) {
            Ok(name) => {
                println!("OK: {name}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Invalid: {err}");
                ExitCode::FAILURE
            }
        },
        Command::Help => {
            output::print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            output::print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run a sketch headless to the requested step count.
///
/// Without `--steps` the sketch runs to completion (step count equals the
/// program length), which is the settled end state of the animation.
fn run_sketch(path: &Path, steps: Option<f64>, json: bool) -> SketchResult<()> {
    let config = SketchConfig::load(path)?;
    let (replay, commands) = replay_sketch(&config, steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
    } else {
        output::print_run_result(&config, &replay, &branch_readouts(&replay.stack));
    }
    Ok(())
}

/// Replay a sketch config headless, returning the replay and the recorded
/// render commands.
#[must_use]
pub fn replay_sketch(config: &SketchConfig, steps: Option<f64>) -> (Replay, Vec<RenderCommand>) {
    // Config was validated at load time, so re-parsing cannot fail; fall
    // back to the empty program to keep this path infallible.
    let program = config.compiled_program().unwrap_or_default();
    let table = ParamTable::from_params(&config.params);
    let steps = steps.unwrap_or(program.len() as f64);

    let mut recorder = Recorder::new();
    let replay = interpret(&program, &table, steps, &mut recorder);
    (replay, recorder.into_commands())
}

/// Validate a sketch file, returning its display name.
fn validate_sketch(path: &Path) -> SketchResult<String> {
    let config = SketchConfig::load(path)?;
    let name = if config.sketch.name.is_empty() {
        config.program.commands.clone()
    } else {
        config.sketch.name.clone()
    };
    Ok(name)
}

/// Number of frames a driver built from this config needs to settle.
#[must_use]
pub fn frames_to_settle(config: &SketchConfig) -> u64 {
    let program = config.compiled_program().unwrap_or_default();
    AnimationDriver::new(config.animation.speed).frames_to_settle(program.len())
}
