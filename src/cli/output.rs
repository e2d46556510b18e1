//! CLI output formatting.

use crate::config::SketchConfig;
use crate::interpreter::{BranchReadout, Replay};

/// Print the headless run summary.
pub fn print_run_result(config: &SketchConfig, replay: &Replay, readouts: &[BranchReadout]) {
    if !config.sketch.name.is_empty() {
        println!("sketch:   {}", config.sketch.name);
    }
    println!("program:  {}", config.program.commands);
    println!("executed: {} commands", replay.executed);

    let pose = replay.current();
    println!(
        "turtle:   x: {:.2}px  y: {:.2}px  rot: {:.2}\u{b0}",
        pose.position.x,
        pose.position.y,
        pose.rotation.to_degrees()
    );

    if readouts.is_empty() {
        println!("branches: none");
    } else {
        println!("branches:");
        for (i, readout) in readouts.iter().enumerate() {
            println!("  [{i}] {readout}");
        }
    }
}

/// Print CLI help text.
pub fn print_help() {
    println!("tortuga - animated turtle-graphics interpreter");
    println!();
    println!("USAGE:");
    println!("    tortuga <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    run <sketch.yaml>       Run a sketch headless and print the final pose");
    println!("        --steps <N>         Stop after N (fractional) command steps");
    println!("        --json              Dump recorded render commands as JSON");
    println!("    validate <sketch.yaml>  Check a sketch file without running it");
    println!("    help                    Show this help");
    println!("    version                 Show version");
    println!();
    println!("The animated front-end lives in the `turtle_tui` binary");
    println!("(build with --features tui).");
}

/// Print version information.
pub fn print_version() {
    println!("tortuga v{}", env!("CARGO_PKG_VERSION"));
}
