//! Animation driver: frame counting and step-change debouncing.
//!
//! The driver owns the monotonically increasing frame counter the sketch
//! advances once per rendered frame. It is explicit state with an explicit
//! [`AnimationDriver::reset`], invoked when the command string changes or
//! the user requests a redraw, so the animation is testable without a host
//! UI. There is no terminal state: once the derived step count exceeds the
//! program length the interpreter simply stops advancing and the turtle
//! marker rests at the final pose.

use serde::{Deserialize, Serialize};

/// Default fraction of a command executed per frame.
///
/// One full command's interpolation spans `1 / DRAW_SPEED` frames (50 at
/// the default).
pub const DRAW_SPEED: f64 = 0.02;

/// Frame counter mapped to a fractional command step count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationDriver {
    /// Frames rendered since the last reset.
    frames: u64,
    /// Steps advanced per frame.
    speed: f64,
}

impl AnimationDriver {
    /// Create a driver with an explicit speed.
    ///
    /// # Panics
    ///
    /// Panics if speed is not positive and finite.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        assert!(speed > 0.0, "speed must be positive");
        assert!(speed.is_finite(), "speed must be finite");
        Self { frames: 0, speed }
    }

    /// Fractional step count for the current frame.
    #[must_use]
    pub fn steps(&self) -> f64 {
        self.frames as f64 * self.speed
    }

    /// Frames rendered since the last reset.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Steps advanced per frame.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Advance one frame.
    ///
    /// Returns the step count for the next frame.
    pub fn tick(&mut self) -> f64 {
        self.frames += 1;
        self.steps()
    }

    /// Restart the animation from the first command.
    pub fn reset(&mut self) {
        self.frames = 0;
    }

    /// Number of frames needed to fully animate a program of `len` commands.
    #[must_use]
    pub fn frames_to_settle(&self, len: usize) -> u64 {
        (len as f64 / self.speed).ceil() as u64
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DRAW_SPEED)
    }
}

/// Debounce for UI stack-inspector refreshes.
///
/// The host is notified only when the executed-command count changes
/// between frames, not on every redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepTracker {
    last: Option<usize>,
}

impl StepTracker {
    /// Create a tracker that fires on the first observation.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Observe this frame's executed count.
    ///
    /// Returns `true` when it differs from the previous frame (always true
    /// on the first observation after a reset).
    pub fn observe(&mut self, executed: usize) -> bool {
        let changed = self.last != Some(executed);
        self.last = Some(executed);
        changed
    }

    /// Forget the previous observation (paired with a driver reset).
    pub fn reset(&mut self) {
        self.last = None;
    }
}
