//! End-to-end interpreter scenarios.

use std::f64::consts::FRAC_PI_2;

use tortuga::prelude::*;

fn run(commands: &str, table: &ParamTable, steps: f64) -> Replay {
    let program = Program::parse(commands).unwrap();
    interpret(&program, table, steps, &mut Recorder::new())
}

fn default_table() -> ParamTable {
    ParamTable::with_values(50.0, 60.0, 60.0)
}

#[test]
fn bracket_free_programs_keep_a_single_pose() {
    for commands in ["", "F", "F+F-F", "+++", "FFFF", "-F-F-"] {
        let replay = run(commands, &default_table(), commands.len() as f64);
        assert_eq!(replay.stack.len(), 1, "commands {commands:?}");
    }
}

#[test]
fn stack_depth_tracks_floored_bracket_balance() {
    for commands in ["[[", "[]", "][", "[[]", "]][[", "[F[F]]", "]]]"] {
        let replay = run(commands, &default_table(), commands.len() as f64);

        // Running balance of pushes over pops, floored at zero: a pop on
        // the root is a no-op.
        let mut depth: usize = 0;
        for ch in commands.chars() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        assert_eq!(
            replay.stack.len() - 1,
            depth,
            "commands {commands:?}"
        );
    }
}

#[test]
fn overshooting_steps_settles_the_pose() {
    let table = ParamTable::with_values(10.0, 90.0, 90.0);
    let exact = run("F+F", &table, 3.0);
    let overshot = run("F+F", &table, 300.0);

    assert_eq!(exact.executed, 3);
    assert_eq!(overshot.executed, 3);
    assert_eq!(exact.stack, overshot.stack);
}

#[test]
fn forward_fifty_pixels() {
    let table = ParamTable::with_values(50.0, 60.0, 60.0);
    let replay = run("F", &table, 1.0);

    let pose = replay.current();
    assert!((pose.position.x - 50.0).abs() < 1e-12);
    assert!(pose.position.y.abs() < 1e-12);
    assert!(pose.rotation.abs() < f64::EPSILON);
}

#[test]
fn forward_turn_forward_traces_a_corner() {
    let table = ParamTable::with_values(10.0, 90.0, 90.0);
    let replay = run("F+F", &table, 3.0);

    let pose = replay.current();
    assert!((pose.position.x - 10.0).abs() < 1e-9);
    assert!((pose.position.y - 10.0).abs() < 1e-9);
    assert!((pose.rotation - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn branch_opens_then_closes() {
    let table = default_table();

    // Mid-replay the branch is on the stack...
    let partial = run("[F]F", &table, 2.0);
    assert_eq!(partial.stack.len(), 2);

    // ...and after the closing bracket only the root continues.
    let full = run("[F]F", &table, 4.0);
    assert_eq!(full.executed, 4);
    assert_eq!(full.stack.len(), 1);
}

#[test]
fn lone_pop_is_a_benign_noop() {
    let replay = run("]", &default_table(), 1.0);
    assert_eq!(replay.executed, 1);
    assert_eq!(replay.stack.len(), 1);
    assert_eq!(*replay.current(), Pose::ROOT);
}

#[test]
fn half_step_draws_and_advances_half_the_length() {
    let table = ParamTable::with_values(50.0, 60.0, 60.0);
    let program = Program::parse("F").unwrap();
    let mut recorder = Recorder::new();
    let replay = interpret(&program, &table, 0.5, &mut recorder);

    assert_eq!(replay.executed, 1);
    assert!((replay.current().position.x - 25.0).abs() < 1e-12);

    match &recorder.commands()[0] {
        RenderCommand::Line { x2, y2, .. } => {
            assert!((x2 - 25.0).abs() < 1e-12);
            assert!(y2.abs() < 1e-12);
        }
        other => panic!("expected the F segment, got {other:?}"),
    }
}

#[test]
fn marker_follows_the_branch_pose() {
    // While inside the branch, the marker sits on the branch turtle.
    let table = ParamTable::with_values(20.0, 90.0, 90.0);
    let program = Program::parse("[+F").unwrap();
    let mut recorder = Recorder::new();
    interpret(&program, &table, 3.0, &mut recorder);

    let body = recorder
        .commands()
        .iter()
        .find_map(|cmd| match cmd {
            RenderCommand::Ellipse { cx, cy, .. } => Some((*cx, *cy)),
            _ => None,
        })
        .unwrap();
    assert!(body.0.abs() < 1e-9);
    assert!((body.1 - 20.0).abs() < 1e-9);
}
