//! Animated branching-tree demo.
//!
//! Drives the animation frame by frame the way a host render loop would,
//! printing the stack inspector whenever the active command changes (the
//! same debounce the TUI uses).
//!
//! Run with: cargo run --example branching_tree

use tortuga::prelude::*;

fn main() -> SketchResult<()> {
    let config = SketchConfig::from_yaml(include_str!("sketches/branching_tree.yaml"))?;
    let program = config.compiled_program()?;
    let params = ParamTable::from_params(&config.params);

    let mut driver = AnimationDriver::new(config.animation.speed);
    let mut tracker = StepTracker::new();

    println!("animating {program} at {} steps/frame\n", driver.speed());

    for _ in 0..driver.frames_to_settle(program.len()) {
        let mut recorder = Recorder::new();
        let replay = interpret(&program, &params, driver.steps(), &mut recorder);

        if tracker.observe(replay.executed) {
            let readouts = branch_readouts(&replay.stack);
            print!("step {:>2}: {} branch(es)", replay.executed, readouts.len());
            for readout in &readouts {
                print!("  [{readout}]");
            }
            println!();
        }

        driver.tick();
    }

    Ok(())
}
