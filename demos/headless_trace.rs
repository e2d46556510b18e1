//! Headless replay demo.
//!
//! Builds a sketch programmatically, replays it to completion, and prints
//! the final pose plus the recorded render commands.
//!
//! Run with: cargo run --example headless_trace

use tortuga::prelude::*;

fn main() -> SketchResult<()> {
    let config = SketchConfig::builder()
        .commands("F+F-F+F")
        .forward_px(30.0)
        .left_deg(90.0)
        .right_deg(90.0)
        .build()?;

    let program = config.compiled_program()?;
    let params = ParamTable::from_params(&config.params);

    let mut recorder = Recorder::new();
    let replay = interpret(&program, &params, program.len() as f64, &mut recorder);

    let pose = replay.current();
    println!("program:  {program}");
    println!("executed: {} commands", replay.executed);
    println!(
        "turtle:   ({:.1}, {:.1}) heading {:.1}\u{b0}",
        pose.position.x,
        pose.position.y,
        pose.rotation.to_degrees()
    );

    println!("\nrender commands:");
    for command in recorder.commands() {
        match command {
            RenderCommand::Line { x1, y1, x2, y2, .. } => {
                println!("  line    ({x1:.1}, {y1:.1}) -> ({x2:.1}, {y2:.1})");
            }
            RenderCommand::Ellipse { cx, cy, rx, ry, .. } => {
                println!("  ellipse ({cx:.1}, {cy:.1}) {rx:.1}x{ry:.1}");
            }
            RenderCommand::Text { x, y, text, .. } => {
                println!("  text    ({x:.1}, {y:.1}) {text:?}");
            }
        }
    }

    Ok(())
}
