//! Platform-agnostic drawing surface for the turtle sketch.
//!
//! Implements the command pattern for rendering: the interpreter draws
//! through the [`Surface`] trait, and the provided [`Recorder`] flattens
//! those calls into world-space [`RenderCommand`]s that any front-end (TUI
//! canvas, headless JSON dump, tests) can consume.
//!
//! The trait mirrors the primitives of an immediate-mode 2D canvas: a
//! save/restore transform stack, translate/rotate, and line/ellipse/text
//! with stroke and fill styling.

pub mod grid;

pub use grid::Grid;

use serde::{Deserialize, Serialize};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    // Sketch palette
    /// Pen stroke for `F` segments.
    pub const PEN: Self = Self::rgb(0, 112, 169);
    /// Turtle body fill.
    pub const SHELL: Self = Self::rgb(0, 128, 0);
    /// Turtle eye fill.
    pub const EYE: Self = Self::WHITE;
    /// Canvas background.
    pub const PAPER: Self = Self::rgb(251, 234, 205);
    /// Grid line color.
    pub const GRID: Self = Self::rgb(120, 110, 95);
}

/// Platform-agnostic render command in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a line segment.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        weight: f64,
    },

    /// Draw a filled ellipse, rotated about its center.
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        color: Color,
    },

    /// Draw a text glyph anchored at a point.
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        bold: bool,
        color: Color,
    },
}

/// Immediate-mode drawing surface.
///
/// Coordinates passed to the primitives are local; the implementation
/// applies the current transform. `push`/`pop` save and restore both the
/// transform and the stroke/fill style, matching canvas semantics.
pub trait Surface {
    /// Save the current transform and style.
    fn push(&mut self);

    /// Restore the most recently saved transform and style.
    fn pop(&mut self);

    /// Translate the local coordinate system.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate the local coordinate system (radians, counterclockwise in
    /// screen space).
    fn rotate(&mut self, radians: f64);

    /// Set the stroke color for subsequent lines.
    fn stroke(&mut self, color: Color);

    /// Set the stroke weight for subsequent lines.
    fn stroke_weight(&mut self, weight: f64);

    /// Set the fill color for subsequent ellipses and text.
    fn fill(&mut self, color: Color);

    /// Draw a line segment in local coordinates.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Draw a filled ellipse centered at `(cx, cy)` with full width `w` and
    /// height `h`, in local coordinates.
    fn ellipse(&mut self, cx: f64, cy: f64, w: f64, h: f64);

    /// Draw text anchored at `(x, y)` in local coordinates.
    fn text(&mut self, text: &str, x: f64, y: f64, size: f64, bold: bool);
}

/// 2D affine transform restricted to rotation + translation.
///
/// The interpreter only ever translates and rotates, so scale/shear are not
/// representable; this keeps decomposition (for ellipse rotation) exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Transform {
    /// Accumulated rotation in radians.
    rotation: f64,
    /// Accumulated translation.
    tx: f64,
    ty: f64,
}

impl Transform {
    const IDENTITY: Self = Self {
        rotation: 0.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Apply the transform to a local point.
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let (sin, cos) = self.rotation.sin_cos();
        (
            self.tx + x * cos - y * sin,
            self.ty + x * sin + y * cos,
        )
    }

    /// Compose a local translation onto this transform.
    fn translate(&mut self, dx: f64, dy: f64) {
        let (x, y) = self.apply(dx, dy);
        self.tx = x;
        self.ty = y;
    }

    /// Compose a local rotation onto this transform.
    fn rotate(&mut self, radians: f64) {
        self.rotation += radians;
    }
}

/// Style state saved alongside the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Style {
    stroke: Color,
    weight: f64,
    fill: Color,
}

impl Style {
    const DEFAULT: Self = Self {
        stroke: Color::BLACK,
        weight: 1.0,
        fill: Color::WHITE,
    };
}

/// A [`Surface`] that records world-space render commands.
///
/// This is the single concrete surface in the crate: the TUI canvas painter
/// replays its command list, tests assert on it, and the headless CLI dumps
/// it as JSON.
#[derive(Debug, Clone)]
pub struct Recorder {
    commands: Vec<RenderCommand>,
    transform: Transform,
    style: Style,
    saved: Vec<(Transform, Style)>,
}

impl Recorder {
    /// Create an empty recorder with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform: Transform::IDENTITY,
            style: Style::DEFAULT,
            saved: Vec::new(),
        }
    }

    /// Recorded commands in draw order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Consume the recorder, yielding the command list.
    #[must_use]
    pub fn into_commands(self) -> Vec<RenderCommand> {
        self.commands
    }

    /// Discard recorded commands and reset transform and style.
    ///
    /// Lets a frame loop reuse one allocation across frames.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform = Transform::IDENTITY;
        self.style = Style::DEFAULT;
        self.saved.clear();
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Recorder {
    fn push(&mut self) {
        self.saved.push((self.transform, self.style));
    }

    fn pop(&mut self) {
        // Unbalanced pop restores the identity, matching canvas behavior of
        // never underflowing the save stack.
        let (transform, style) = self
            .saved
            .pop()
            .unwrap_or((Transform::IDENTITY, Style::DEFAULT));
        self.transform = transform;
        self.style = style;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform.rotate(radians);
    }

    fn stroke(&mut self, color: Color) {
        self.style.stroke = color;
    }

    fn stroke_weight(&mut self, weight: f64) {
        self.style.weight = weight;
    }

    fn fill(&mut self, color: Color) {
        self.style.fill = color;
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (wx1, wy1) = self.transform.apply(x1, y1);
        let (wx2, wy2) = self.transform.apply(x2, y2);
        self.commands.push(RenderCommand::Line {
            x1: wx1,
            y1: wy1,
            x2: wx2,
            y2: wy2,
            color: self.style.stroke,
            weight: self.style.weight,
        });
    }

    fn ellipse(&mut self, cx: f64, cy: f64, w: f64, h: f64) {
        let (wx, wy) = self.transform.apply(cx, cy);
        self.commands.push(RenderCommand::Ellipse {
            cx: wx,
            cy: wy,
            rx: w / 2.0,
            ry: h / 2.0,
            rotation: self.transform.rotation,
            color: self.style.fill,
        });
    }

    fn text(&mut self, text: &str, x: f64, y: f64, size: f64, bold: bool) {
        let (wx, wy) = self.transform.apply(x, y);
        self.commands.push(RenderCommand::Text {
            x: wx,
            y: wy,
            text: text.to_string(),
            size,
            bold,
            color: self.style.fill,
        });
    }
}
