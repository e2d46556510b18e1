//! Turtle command interpreter.
//!
//! Replays a [`Program`] as turtle-graphics operations over a pose stack,
//! drawing through a [`Surface`]. The replay is a pure function of
//! `(program, params, steps)`: the stack is rebuilt from the root pose on
//! every call, so animating is simply calling [`interpret`] again with a
//! larger `steps`. The command at `floor(steps)` executes with a clamped
//! fraction in `[0, 1]`, which scales both the drawn segment and the pose
//! mutation; because nothing persists between calls this never accumulates
//! drift.

use serde::{Deserialize, Serialize};

use crate::program::{Opcode, ParamTable, Program};
use crate::render::{Color, Surface};

/// Turtle marker body size (full width and height of the ellipse).
const MARKER_BODY: (f64, f64) = (25.0, 20.0);
/// Turtle marker eye diameter.
const MARKER_EYE: f64 = 5.0;
/// Eye offset from the body center, along and across the heading.
const MARKER_EYE_OFFSET: (f64, f64) = (10.0, 5.0);

/// Command-string overlay text size in pixels.
const OVERLAY_TEXT_SIZE: f64 = 24.0;
/// Monospace advance as a fraction of the text size.
const OVERLAY_ADVANCE: f64 = 0.75;

/// 2D position in sketch pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A turtle's location and heading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Position in sketch pixels.
    pub position: Vec2,
    /// Heading in radians; 0 points along +x, positive turns toward +y.
    pub rotation: f64,
}

impl Pose {
    /// The root pose: origin, heading along +x.
    pub const ROOT: Self = Self {
        position: Vec2::zero(),
        rotation: 0.0,
    };
}

/// Result of one interpretation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    /// Final loop index reached; the character at this index is the one
    /// currently animating (or `len` when the program has settled).
    pub executed: usize,
    /// Full pose stack after the pass. Never empty.
    pub stack: Vec<Pose>,
}

impl Replay {
    /// The current (top-of-stack) pose.
    #[must_use]
    pub fn current(&self) -> &Pose {
        self.stack.last().unwrap_or(&Pose::ROOT)
    }

    /// Whether every command has fully executed.
    #[must_use]
    pub fn is_settled(&self, program: &Program) -> bool {
        self.executed == program.len()
    }
}

/// Replay `program` against `surface` for a fractional number of steps.
///
/// Commands `0..floor(steps)` execute fully; the command at `floor(steps)`
/// executes with fraction `steps - floor(steps)`. The turtle marker is drawn
/// at the final current pose after the loop.
///
/// `steps` below zero behaves as zero. An empty program returns the
/// root-only stack with `executed == 0`.
pub fn interpret<S: Surface>(
    program: &Program,
    params: &ParamTable,
    steps: f64,
    surface: &mut S,
) -> Replay {
    let mut stack = vec![Pose::ROOT];

    let mut i = 0;
    while (i as f64) < steps && i < program.len() {
        let op = program.ops()[i];
        let frac = (steps - i as f64).clamp(0.0, 1.0);
        execute(op, &mut stack, params, frac, surface);
        i += 1;
    }

    draw_marker(stack.last().copied().unwrap_or(Pose::ROOT), surface);

    Replay { executed: i, stack }
}

/// Execute a single command at the given completion fraction.
fn execute<S: Surface>(
    op: Opcode,
    stack: &mut Vec<Pose>,
    params: &ParamTable,
    frac: f64,
    surface: &mut S,
) {
    match op {
        Opcode::Forward => {
            let len = params.first(Opcode::Forward);
            let Some(pose) = stack.last_mut() else { return };

            surface.push();
            surface.translate(pose.position.x, pose.position.y);
            surface.rotate(pose.rotation);
            surface.stroke(Color::PEN);
            surface.stroke_weight(1.0);
            surface.line(0.0, 0.0, len * frac, 0.0);
            surface.pop();

            pose.position.x += len * frac * pose.rotation.cos();
            pose.position.y += len * frac * pose.rotation.sin();
        }
        Opcode::TurnLeft => {
            let angle = params.first(Opcode::TurnLeft);
            if let Some(pose) = stack.last_mut() {
                pose.rotation += angle * frac;
            }
        }
        Opcode::TurnRight => {
            let angle = params.first(Opcode::TurnRight);
            if let Some(pose) = stack.last_mut() {
                pose.rotation -= angle * frac;
            }
        }
        Opcode::Push => {
            if let Some(pose) = stack.last().copied() {
                stack.push(pose);
            }
        }
        Opcode::Pop => {
            // Never drop the root pose; a `]` without a matching `[` is a
            // benign no-op so partial edits stay runnable.
            if stack.len() > 1 {
                stack.pop();
            }
        }
    }
}

/// Draw the turtle marker (body plus two eyes) at a pose.
fn draw_marker<S: Surface>(pose: Pose, surface: &mut S) {
    surface.push();
    surface.translate(pose.position.x, pose.position.y);
    surface.rotate(pose.rotation);

    surface.fill(Color::SHELL);
    surface.ellipse(0.0, 0.0, MARKER_BODY.0, MARKER_BODY.1);
    surface.fill(Color::EYE);
    surface.ellipse(MARKER_EYE_OFFSET.0, MARKER_EYE_OFFSET.1, MARKER_EYE, MARKER_EYE);
    surface.ellipse(MARKER_EYE_OFFSET.0, -MARKER_EYE_OFFSET.1, MARKER_EYE, MARKER_EYE);

    surface.pop();
}

/// Draw the command string centered above the turtle, with the active
/// character in bold.
pub fn draw_overlay<S: Surface>(
    program: &Program,
    executed: usize,
    anchor: Pose,
    surface: &mut S,
) {
    let advance = OVERLAY_TEXT_SIZE * OVERLAY_ADVANCE;
    let half = program.len() as f64 / 2.0;

    surface.fill(Color::BLACK);
    for (i, op) in program.ops().iter().enumerate() {
        let offset = advance * (i as f64 - half);
        surface.text(
            &op.as_char().to_string(),
            anchor.position.x + offset,
            anchor.position.y - OVERLAY_TEXT_SIZE,
            OVERLAY_TEXT_SIZE,
            i == executed,
        );
    }
}

/// Per-branch inspector readout.
///
/// Positions are rounded to integer pixels, rotation to integer degrees,
/// matching the inspector panel display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchReadout {
    /// X position in whole pixels.
    pub x: i64,
    /// Y position in whole pixels.
    pub y: i64,
    /// Heading in whole degrees.
    pub rotation_deg: i64,
}

impl std::fmt::Display for BranchReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {}px  y: {}px  rot: {}\u{b0}", self.x, self.y, self.rotation_deg)
    }
}

/// Derive inspector readouts from a pose stack.
///
/// The root pose is skipped: the inspector shows branches only, so an
/// unbracketed program yields an empty readout.
#[must_use]
pub fn branch_readouts(stack: &[Pose]) -> Vec<BranchReadout> {
    stack
        .iter()
        .skip(1)
        .map(|pose| BranchReadout {
            x: pose.position.x.round() as i64,
            y: pose.position.y.round() as i64,
            rotation_deg: pose.rotation.to_degrees().round() as i64,
        })
        .collect()
}
