//! tortuga CLI - animated turtle-graphics interpreter
//!
//! Headless command-line interface for running and validating sketches.
//! The animated front-end is the `turtle_tui` binary.

use std::process::ExitCode;

use tortuga::cli::{run_cli, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    run_cli(&args)
}
