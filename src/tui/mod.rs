//! TUI front-end for the animated turtle sketch.
//!
//! The testable application state lives in [`sketch_app`]; terminal I/O and
//! widget layout are handled by the `turtle_tui` binary.

pub mod sketch_app;

pub use sketch_app::{ParamSlot, TurtleApp};
