//! Command programs and per-opcode parameters.
//!
//! A [`Program`] is an ordered sequence of single-character opcodes drawn
//! from the alphabet `F + - [ ]`. Unrecognized characters never reach the
//! interpreter: interactive edits are filtered through
//! [`Program::sanitize`], while config loading uses the strict
//! [`Program::parse`] so malformed files are reported instead of silently
//! truncated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::SketchParams;
use crate::error::{SketchError, SketchResult};

/// A single turtle instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// `F` — draw a line segment forward and advance.
    Forward,
    /// `+` — rotate the heading counterclockwise.
    TurnLeft,
    /// `-` — rotate the heading clockwise.
    TurnRight,
    /// `[` — push a copy of the current pose.
    Push,
    /// `]` — pop the current pose (benign no-op on the root).
    Pop,
}

impl Opcode {
    /// All opcodes in display order.
    pub const ALL: [Self; 5] = [
        Self::Forward,
        Self::TurnLeft,
        Self::TurnRight,
        Self::Push,
        Self::Pop,
    ];

    /// Decode a command character.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'F' => Some(Self::Forward),
            '+' => Some(Self::TurnLeft),
            '-' => Some(Self::TurnRight),
            '[' => Some(Self::Push),
            ']' => Some(Self::Pop),
            _ => None,
        }
    }

    /// The command character for this opcode.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::TurnLeft => '+',
            Self::TurnRight => '-',
            Self::Push => '[',
            Self::Pop => ']',
        }
    }

    /// Whether this opcode manipulates the pose stack.
    #[must_use]
    pub const fn is_bracket(self) -> bool {
        matches!(self, Self::Push | Self::Pop)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The set of opcodes accepted at the input boundary.
///
/// Mirrors the UI mode flag: introductory sketches disable brackets so the
/// pose stack stays single-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `F + -` only.
    Linear,
    /// `F + - [ ]`.
    #[default]
    Branching,
}

impl Alphabet {
    /// Whether the alphabet admits the given opcode.
    #[must_use]
    pub const fn admits(self, op: Opcode) -> bool {
        match self {
            Self::Branching => true,
            Self::Linear => !op.is_bracket(),
        }
    }
}

/// An ordered sequence of opcodes ready for interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    ops: Vec<Opcode>,
}

impl Program {
    /// Parse a command string, rejecting characters outside the branching
    /// alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::UnknownOpcode`] on the first unrecognized
    /// character.
    pub fn parse(commands: &str) -> SketchResult<Self> {
        Self::parse_with(commands, Alphabet::Branching)
    }

    /// Parse a command string against a specific alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::UnknownOpcode`] for characters outside the
    /// full opcode set and [`SketchError::BracketsDisabled`] for brackets
    /// under [`Alphabet::Linear`].
    pub fn parse_with(commands: &str, alphabet: Alphabet) -> SketchResult<Self> {
        let mut ops = Vec::with_capacity(commands.len());
        for (position, ch) in commands.char_indices() {
            let op = Opcode::from_char(ch)
                .ok_or(SketchError::UnknownOpcode { ch, position })?;
            if !alphabet.admits(op) {
                return Err(SketchError::BracketsDisabled { ch, position });
            }
            ops.push(op);
        }
        Ok(Self { ops })
    }

    /// Filter a command string down to the active alphabet.
    ///
    /// This is the interactive-edit path: anything outside the alphabet is
    /// dropped silently, so partially typed input is always runnable.
    #[must_use]
    pub fn sanitize(input: &str, alphabet: Alphabet) -> String {
        input
            .chars()
            .filter(|&ch| Opcode::from_char(ch).is_some_and(|op| alphabet.admits(op)))
            .collect()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the program has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The opcodes in execution order.
    #[must_use]
    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    /// Render back to a command string.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.ops.iter().map(|op| op.as_char()).collect()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for op in &self.ops {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Per-opcode numeric parameters, read-only during one interpretation pass.
///
/// Rebuilt whenever a slider value changes. Angles are stored in radians;
/// the degrees-to-radians conversion happens here, at table-build time.
/// Insertion order is stable so readouts iterate deterministically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamTable {
    entries: IndexMap<Opcode, Vec<f64>>,
}

impl ParamTable {
    /// Build a table from raw slider values (length in pixels, angles in
    /// degrees).
    #[must_use]
    pub fn with_values(forward_px: f64, left_deg: f64, right_deg: f64) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(Opcode::Forward, vec![forward_px]);
        entries.insert(Opcode::TurnLeft, vec![left_deg.to_radians()]);
        entries.insert(Opcode::TurnRight, vec![right_deg.to_radians()]);
        entries.insert(Opcode::Push, Vec::new());
        entries.insert(Opcode::Pop, Vec::new());
        Self { entries }
    }

    /// Build a table from sketch parameters.
    #[must_use]
    pub fn from_params(params: &SketchParams) -> Self {
        Self::with_values(params.forward_px, params.left_deg, params.right_deg)
    }

    /// Parameters registered for an opcode.
    ///
    /// Every opcode in the alphabet has an entry (possibly empty); a missing
    /// entry would be a programming error, so lookups fall back to the empty
    /// slice rather than panicking.
    #[must_use]
    pub fn get(&self, op: Opcode) -> &[f64] {
        self.entries.get(&op).map_or(&[], Vec::as_slice)
    }

    /// First parameter for an opcode, or 0.0 when none is registered.
    #[must_use]
    pub fn first(&self, op: Opcode) -> f64 {
        self.get(op).first().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_round_trip() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_char(op.as_char()), Some(op));
        }
        assert_eq!(Opcode::from_char('x'), None);
    }

    #[test]
    fn test_parse_valid_program() {
        let program = Program::parse("F+F-[F]").unwrap();
        assert_eq!(program.len(), 7);
        assert_eq!(program.as_string(), "F+F-[F]");
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        let err = Program::parse("FXF").unwrap_err();
        assert!(matches!(
            err,
            SketchError::UnknownOpcode { ch: 'X', position: 1 }
        ));
    }

    #[test]
    fn test_parse_linear_rejects_brackets() {
        let err = Program::parse_with("F[F]", Alphabet::Linear).unwrap_err();
        assert!(matches!(
            err,
            SketchError::BracketsDisabled { ch: '[', position: 1 }
        ));
    }

    #[test]
    fn test_sanitize_branching() {
        let cleaned = Program::sanitize("Fx+ y-[z]", Alphabet::Branching);
        assert_eq!(cleaned, "F+-[]");
    }

    #[test]
    fn test_sanitize_linear_drops_brackets() {
        let cleaned = Program::sanitize("F[+F]-", Alphabet::Linear);
        assert_eq!(cleaned, "F+F-");
    }

    #[test]
    fn test_param_table_converts_degrees() {
        let table = ParamTable::with_values(50.0, 90.0, 180.0);
        assert!((table.first(Opcode::Forward) - 50.0).abs() < 1e-12);
        assert!((table.first(Opcode::TurnLeft) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((table.first(Opcode::TurnRight) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_param_table_brackets_have_no_params() {
        let table = ParamTable::with_values(50.0, 60.0, 60.0);
        assert!(table.get(Opcode::Push).is_empty());
        assert!(table.get(Opcode::Pop).is_empty());
        assert!((table.first(Opcode::Pop) - 0.0).abs() < f64::EPSILON);
    }
}
