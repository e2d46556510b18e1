//! Background grid with pan offset.
//!
//! The sketch background is an infinite grid that follows the pan offset.
//! Lines are emitted in world coordinates covering the visible viewport;
//! every fifth line is drawn heavier as a major line.

use crate::render::{Color, RenderCommand};

/// Background grid generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Viewport width in pixels.
    width: f64,
    /// Viewport height in pixels.
    height: f64,
    /// Cell size in pixels.
    spacing: f64,
    /// Stroke weight for minor lines.
    minor_weight: f64,
    /// Stroke weight for major lines (every fifth).
    major_weight: f64,
}

impl Grid {
    /// Minor lines per major line.
    const MAJOR_EVERY: i64 = 5;

    /// Create a grid for a viewport of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64, spacing: f64, minor_weight: f64, major_weight: f64) -> Self {
        Self {
            width,
            height,
            spacing,
            minor_weight,
            major_weight,
        }
    }

    /// Emit grid lines for the viewport, shifted by the pan offset.
    ///
    /// The offset is the same translation applied to the drawing, so grid
    /// cells stay glued to world coordinates while panning.
    #[must_use]
    pub fn commands(&self, offset_x: f64, offset_y: f64) -> Vec<RenderCommand> {
        let mut commands = Vec::new();
        if self.spacing <= 0.0 {
            return commands;
        }

        // First grid index at or left of the viewport edge.
        let first_col = ((-offset_x) / self.spacing).floor() as i64;
        let last_col = ((self.width - offset_x) / self.spacing).ceil() as i64;
        for col in first_col..=last_col {
            let x = col as f64 * self.spacing + offset_x;
            commands.push(self.line(x, 0.0, x, self.height, col));
        }

        let first_row = ((-offset_y) / self.spacing).floor() as i64;
        let last_row = ((self.height - offset_y) / self.spacing).ceil() as i64;
        for row in first_row..=last_row {
            let y = row as f64 * self.spacing + offset_y;
            commands.push(self.line(0.0, y, self.width, y, row));
        }

        commands
    }

    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, index: i64) -> RenderCommand {
        let weight = if index.rem_euclid(Self::MAJOR_EVERY) == 0 {
            self.major_weight
        } else {
            self.minor_weight
        };
        RenderCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color: Color::GRID,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(commands: &[RenderCommand]) -> Vec<f64> {
        commands
            .iter()
            .map(|cmd| match cmd {
                RenderCommand::Line { weight, .. } => *weight,
                other => panic!("grid emitted non-line command {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_grid_covers_viewport() {
        let grid = Grid::new(100.0, 50.0, 10.0, 0.1, 0.2);
        let commands = grid.commands(0.0, 0.0);

        // 11 vertical + 6 horizontal, plus one overflow line per axis from
        // the inclusive range.
        assert!(commands.len() >= 17);
        for cmd in &commands {
            if let RenderCommand::Line { x1, y1, .. } = cmd {
                assert!(*x1 >= -10.0 && *x1 <= 110.0);
                assert!(*y1 >= -10.0 && *y1 <= 60.0);
            }
        }
    }

    #[test]
    fn test_every_fifth_line_is_major() {
        let grid = Grid::new(100.0, 0.0, 10.0, 0.1, 0.2);
        let commands = grid.commands(0.0, 0.0);
        let weights = weights(&commands);

        let majors = weights.iter().filter(|w| (**w - 0.2).abs() < 1e-12).count();
        let minors = weights.iter().filter(|w| (**w - 0.1).abs() < 1e-12).count();
        assert!(majors >= 2);
        assert!(minors > majors);
    }

    #[test]
    fn test_pan_keeps_lines_on_world_coordinates() {
        let grid = Grid::new(100.0, 100.0, 10.0, 0.1, 0.2);
        let panned = grid.commands(3.0, 0.0);

        // Every vertical line lands on a world multiple of the spacing
        // shifted by the offset.
        for cmd in &panned {
            if let RenderCommand::Line { x1, y1, y2, .. } = cmd {
                if (y2 - y1).abs() > 1e-12 {
                    let world = x1 - 3.0;
                    let remainder = (world / 10.0).round() * 10.0 - world;
                    assert!(remainder.abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_spacing_emits_nothing() {
        let grid = Grid::new(100.0, 100.0, 0.0, 0.1, 0.2);
        assert!(grid.commands(0.0, 0.0).is_empty());
    }
}
