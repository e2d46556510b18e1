//! # tortuga
//!
//! Deterministic animated turtle-graphics interpreter.
//!
//! A command string over the alphabet `F + - [ ]` is replayed as turtle
//! operations over a pose stack, with sub-step interpolation so the command
//! currently executing is drawn partially complete. The whole frame is
//! recomputed from scratch on every tick, which keeps each frame a pure
//! function of `(program, params, steps)`.
//!
//! ## Example
//!
//! ```rust
//! use tortuga::prelude::*;
//!
//! let program = Program::parse("F+F").unwrap();
//! let params = ParamTable::from_params(&SketchParams::default());
//! let mut recorder = Recorder::new();
//!
//! let replay = interpret(&program, &params, 2.0, &mut recorder);
//! assert_eq!(replay.executed, 2);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
    clippy::suboptimal_flops      // Explicit formulas match the reference geometry
)]

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod program;
pub mod render;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::animation::{AnimationDriver, StepTracker, DRAW_SPEED};
    pub use crate::config::{SketchConfig, SketchConfigBuilder, SketchParams};
    pub use crate::error::{SketchError, SketchResult};
    pub use crate::interpreter::{branch_readouts, interpret, BranchReadout, Pose, Replay, Vec2};
    pub use crate::program::{Alphabet, Opcode, ParamTable, Program};
    pub use crate::render::{Color, Recorder, RenderCommand, Surface};
}

/// Re-export for public API
pub use error::{SketchError, SketchResult};
