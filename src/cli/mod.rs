//! CLI module for tortuga.
//!
//! All CLI logic lives here rather than in main.rs to enable full test
//! coverage. The entry point `run_cli` is called from main.rs with parsed
//! arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{frames_to_settle, replay_sketch, run_cli};
pub use output::{print_help, print_run_result, print_version};

#[cfg(test)]
mod tests;
