//! Turtle TUI application state and logic.
//!
//! This module contains the testable state and logic for the turtle TUI.
//! Terminal I/O is handled by the binary, but all state management lives
//! here: command-string editing, parameter adjustment, panning, and the
//! per-frame replay that produces the render-command list the canvas
//! painter consumes.

use crossterm::event::KeyCode;

use crate::animation::{AnimationDriver, StepTracker};
use crate::config::{SketchConfig, SketchParams};
use crate::interpreter::{branch_readouts, draw_overlay, interpret, BranchReadout, Vec2};
use crate::program::{Alphabet, ParamTable, Program};
use crate::render::{Grid, Recorder, RenderCommand, Surface};

/// Embedded default sketch configuration.
const DEFAULT_SKETCH_YAML: &str = include_str!("../../demos/sketches/branching_tree.yaml");

/// Pixels panned per arrow-key press.
const PAN_STEP: f64 = 10.0;
/// Forward-length change per adjustment.
const FORWARD_STEP: f64 = 1.0;
/// Angle change per adjustment, degrees.
const ANGLE_STEP: f64 = 5.0;

/// Which parameter the adjustment keys target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamSlot {
    /// Forward (`F`) length.
    #[default]
    Forward,
    /// Left (`+`) angle.
    Left,
    /// Right (`-`) angle.
    Right,
}

impl ParamSlot {
    /// Cycle to the next slot.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Forward => Self::Left,
            Self::Left => Self::Right,
            Self::Right => Self::Forward,
        }
    }

    /// Display label with the opcode it drives.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "Forwards (F) amount",
            Self::Left => "Left (+) angle",
            Self::Right => "Right (-) angle",
        }
    }
}

/// Application state for the turtle TUI.
pub struct TurtleApp {
    /// Active sketch configuration.
    pub config: SketchConfig,
    /// Sanitized command string under edit.
    pub input: String,
    /// Compiled program (kept in sync with `input`).
    program: Program,
    /// Slider values.
    pub params: SketchParams,
    /// Active input alphabet.
    pub alphabet: Alphabet,
    /// Frame counter and speed.
    pub driver: AnimationDriver,
    /// Inspector refresh debounce.
    tracker: StepTracker,
    /// Index of the command currently animating.
    pub executed: usize,
    /// Branch readouts, refreshed only when `executed` changes.
    pub readouts: Vec<BranchReadout>,
    /// World-space render commands for the current frame.
    pub frame: Vec<RenderCommand>,
    /// Pan offset in pixels.
    pub pan: Vec2,
    /// Parameter targeted by the adjustment keys.
    pub selected: ParamSlot,
    /// Whether the animation is paused.
    pub paused: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Background grid generator.
    grid: Grid,
}

impl TurtleApp {
    /// Create the app from the embedded default sketch.
    #[must_use]
    pub fn new() -> Self {
        SketchConfig::from_yaml(DEFAULT_SKETCH_YAML)
            .map_or_else(|_| Self::from_config(SketchConfig::default()), Self::from_config)
    }

    /// Create the app from a specific configuration.
    #[must_use]
    pub fn from_config(config: SketchConfig) -> Self {
        let alphabet = config.program.alphabet;
        let input = Program::sanitize(&config.program.commands, alphabet);
        let program = Program::parse_with(&input, alphabet).unwrap_or_default();
        let grid = Grid::new(
            config.viewport.width,
            config.viewport.height,
            config.viewport.grid_spacing,
            config.viewport.grid_minor,
            config.viewport.grid_major,
        );

        Self {
            input,
            program,
            params: config.params,
            alphabet,
            driver: AnimationDriver::new(config.animation.speed),
            tracker: StepTracker::new(),
            executed: 0,
            readouts: Vec::new(),
            frame: Vec::new(),
            pan: Vec2::zero(),
            selected: ParamSlot::default(),
            paused: false,
            should_quit: false,
            grid,
            config,
        }
    }

    /// The compiled program currently animating.
    #[must_use]
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Restart the animation from the first command.
    pub fn redraw(&mut self) {
        self.driver.reset();
        self.tracker.reset();
    }

    /// Replace the command string, filtering it against the alphabet and
    /// restarting the animation.
    pub fn set_input(&mut self, raw: &str) {
        self.input = Program::sanitize(raw, self.alphabet);
        self.program = Program::parse_with(&self.input, self.alphabet).unwrap_or_default();
        self.redraw();
    }

    /// Toggle bracket support, re-sanitizing the current input.
    pub fn toggle_alphabet(&mut self) {
        self.alphabet = match self.alphabet {
            Alphabet::Linear => Alphabet::Branching,
            Alphabet::Branching => Alphabet::Linear,
        };
        let raw = self.input.clone();
        self.set_input(&raw);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(ch @ ('F' | '+' | '-' | '[' | ']')) => {
                let mut raw = self.input.clone();
                raw.push(ch);
                self.set_input(&raw);
            }
            KeyCode::Backspace => {
                let mut raw = self.input.clone();
                raw.pop();
                self.set_input(&raw);
            }
            KeyCode::Char('r') => self.redraw(),
            KeyCode::Char('b') => self.toggle_alphabet(),
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.selected = self.selected.next(),
            KeyCode::Char('.') => self.adjust_param(1.0),
            KeyCode::Char(',') => self.adjust_param(-1.0),
            KeyCode::Up => self.pan.y += PAN_STEP,
            KeyCode::Down => self.pan.y -= PAN_STEP,
            KeyCode::Left => self.pan.x += PAN_STEP,
            KeyCode::Right => self.pan.x -= PAN_STEP,
            KeyCode::Char('c') => self.pan = Vec2::zero(),
            _ => {}
        }
    }

    /// Adjust the selected parameter, clamped to its slider range.
    fn adjust_param(&mut self, direction: f64) {
        match self.selected {
            ParamSlot::Forward => {
                self.params.forward_px =
                    (self.params.forward_px + direction * FORWARD_STEP).clamp(1.0, 100.0);
            }
            ParamSlot::Left => {
                self.params.left_deg =
                    (self.params.left_deg + direction * ANGLE_STEP).clamp(0.0, 180.0);
            }
            ParamSlot::Right => {
                self.params.right_deg =
                    (self.params.right_deg + direction * ANGLE_STEP).clamp(0.0, 180.0);
            }
        }
    }

    /// Value of the selected parameter, with its display unit.
    #[must_use]
    pub fn selected_value(&self) -> (f64, &'static str) {
        match self.selected {
            ParamSlot::Forward => (self.params.forward_px, "px"),
            ParamSlot::Left => (self.params.left_deg, "\u{b0}"),
            ParamSlot::Right => (self.params.right_deg, "\u{b0}"),
        }
    }

    /// Advance one frame: replay the program at the current step count,
    /// rebuild the frame's render commands, and refresh the inspector when
    /// the active command changes.
    pub fn update(&mut self) {
        let steps = self.driver.steps();
        let table = ParamTable::from_params(&self.params);

        let center_x = self.config.viewport.width / 2.0 + self.pan.x;
        let center_y = self.config.viewport.height / 2.0 + self.pan.y;

        let mut recorder = Recorder::new();
        recorder.push();
        recorder.translate(center_x, center_y);
        let replay = interpret(&self.program, &table, steps, &mut recorder);
        draw_overlay(&self.program, replay.executed, *replay.current(), &mut recorder);
        recorder.pop();

        // Grid first so the drawing layers on top of it.
        let mut frame = self.grid.commands(self.pan.x, self.pan.y);
        frame.extend(recorder.into_commands());
        self.frame = frame;

        if self.tracker.observe(replay.executed) {
            self.readouts = branch_readouts(&replay.stack);
        }
        self.executed = replay.executed;

        if !self.paused {
            self.driver.tick();
        }
    }

    /// Whether the animation has reached the end of the program.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.executed == self.program.len()
    }
}

impl Default for TurtleApp {
    fn default() -> Self {
        Self::new()
    }
}
