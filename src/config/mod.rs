//! Sketch configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in layers:
//! - Type-safe configuration structs with `deny_unknown_fields`
//! - Runtime semantic validation (slider ranges, positive speed)
//! - Strict program parsing so malformed command strings in config files
//!   are reported instead of silently filtered

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::animation::DRAW_SPEED;
use crate::error::SketchResult;
use crate::program::{Alphabet, Program};

/// Top-level sketch configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SketchConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Sketch metadata.
    #[serde(default)]
    pub sketch: SketchMeta,

    /// Command program settings.
    #[serde(default)]
    pub program: ProgramConfig,

    /// Per-opcode slider values.
    #[validate(nested)]
    #[serde(default)]
    pub params: SketchParams,

    /// Animation settings.
    #[validate(nested)]
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Viewport and grid settings.
    #[validate(nested)]
    #[serde(default)]
    pub viewport: ViewportConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl SketchConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    /// - The command string does not parse against the active alphabet
    pub fn load<P: AsRef<Path>>(path: P) -> SketchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SketchResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.compiled_program()?;
        Ok(config)
    }

    /// Serialize configuration to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SketchResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parse the configured command string against the configured alphabet.
    ///
    /// # Errors
    ///
    /// Returns error on characters outside the alphabet.
    pub fn compiled_program(&self) -> SketchResult<Program> {
        Program::parse_with(&self.program.commands, self.program.alphabet)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> SketchConfigBuilder {
        SketchConfigBuilder::default()
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            sketch: SketchMeta::default(),
            program: ProgramConfig::default(),
            params: SketchParams::default(),
            animation: AnimationConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Clone, Default)]
pub struct SketchConfigBuilder {
    config: SketchConfig,
}

impl SketchConfigBuilder {
    /// Set the command string.
    #[must_use]
    pub fn commands(mut self, commands: impl Into<String>) -> Self {
        self.config.program.commands = commands.into();
        self
    }

    /// Set the input alphabet.
    #[must_use]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.program.alphabet = alphabet;
        self
    }

    /// Set the forward length in pixels.
    #[must_use]
    pub fn forward_px(mut self, px: f64) -> Self {
        self.config.params.forward_px = px;
        self
    }

    /// Set the left-turn angle in degrees.
    #[must_use]
    pub fn left_deg(mut self, deg: f64) -> Self {
        self.config.params.left_deg = deg;
        self
    }

    /// Set the right-turn angle in degrees.
    #[must_use]
    pub fn right_deg(mut self, deg: f64) -> Self {
        self.config.params.right_deg = deg;
        self
    }

    /// Set the animation speed (steps per frame).
    #[must_use]
    pub fn speed(mut self, speed: f64) -> Self {
        self.config.animation.speed = speed;
        self
    }

    /// Build the configuration, validating it.
    ///
    /// # Errors
    ///
    /// Returns error if validation or program parsing fails.
    pub fn build(self) -> SketchResult<SketchConfig> {
        self.config.validate()?;
        self.config.compiled_program()?;
        Ok(self.config)
    }
}

/// Sketch metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SketchMeta {
    /// Human-readable sketch name.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Command program settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramConfig {
    /// The command string (`F + - [ ]`).
    #[serde(default)]
    pub commands: String,

    /// Which opcodes the input boundary accepts.
    #[serde(default)]
    pub alphabet: Alphabet,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            commands: "F+F-F".to_string(),
            alphabet: Alphabet::Branching,
        }
    }
}

/// Per-opcode slider values.
///
/// Angles are degrees here; conversion to radians happens when the
/// [`crate::program::ParamTable`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SketchParams {
    /// Forward (`F`) length in pixels.
    #[validate(range(min = 1.0, max = 100.0))]
    #[serde(default = "default_forward_px")]
    pub forward_px: f64,

    /// Left (`+`) angle in degrees.
    #[validate(range(min = 0.0, max = 180.0))]
    #[serde(default = "default_turn_deg")]
    pub left_deg: f64,

    /// Right (`-`) angle in degrees.
    #[validate(range(min = 0.0, max = 180.0))]
    #[serde(default = "default_turn_deg")]
    pub right_deg: f64,
}

fn default_forward_px() -> f64 {
    50.0
}

fn default_turn_deg() -> f64 {
    60.0
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            forward_px: default_forward_px(),
            left_deg: default_turn_deg(),
            right_deg: default_turn_deg(),
        }
    }
}

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Steps advanced per frame; one command spans `1 / speed` frames.
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_speed() -> f64 {
    DRAW_SPEED
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
        }
    }
}

/// Viewport and grid settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ViewportConfig {
    /// Canvas width in pixels.
    #[validate(range(min = 1.0))]
    #[serde(default = "default_width")]
    pub width: f64,

    /// Canvas height in pixels.
    #[validate(range(min = 1.0))]
    #[serde(default = "default_height")]
    pub height: f64,

    /// Grid cell size in pixels.
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f64,

    /// Minor grid line weight.
    #[serde(default = "default_grid_minor")]
    pub grid_minor: f64,

    /// Major grid line weight.
    #[serde(default = "default_grid_major")]
    pub grid_major: f64,
}

fn default_width() -> f64 {
    700.0
}

fn default_height() -> f64 {
    550.0
}

fn default_grid_spacing() -> f64 {
    10.0
}

fn default_grid_minor() -> f64 {
    0.1
}

fn default_grid_major() -> f64 {
    0.2
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            grid_spacing: default_grid_spacing(),
            grid_minor: default_grid_minor(),
            grid_major: default_grid_major(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SketchError;

    #[test]
    fn test_default_config_is_valid() {
        let config = SketchConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.compiled_program().is_ok());
    }

    #[test]
    fn test_builder_round_trip() {
        let config = SketchConfig::builder()
            .commands("F[+F][-F]")
            .forward_px(30.0)
            .left_deg(25.0)
            .right_deg(25.0)
            .speed(0.05)
            .build()
            .unwrap();

        assert_eq!(config.program.commands, "F[+F][-F]");
        assert!((config.params.forward_px - 30.0).abs() < 1e-12);
        assert!((config.animation.speed - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_builder_rejects_out_of_range_params() {
        let result = SketchConfig::builder().forward_px(500.0).build();
        assert!(matches!(result, Err(SketchError::Validation(_))));
    }

    #[test]
    fn test_builder_rejects_unknown_commands() {
        let result = SketchConfig::builder().commands("FQF").build();
        assert!(matches!(result, Err(SketchError::UnknownOpcode { .. })));
    }

    #[test]
    fn test_linear_alphabet_rejects_brackets() {
        let result = SketchConfig::builder()
            .commands("F[F]")
            .alphabet(Alphabet::Linear)
            .build();
        assert!(matches!(result, Err(SketchError::BracketsDisabled { .. })));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SketchConfig::builder()
            .commands("FF+F")
            .speed(0.01)
            .build()
            .unwrap();
        let yaml = config.to_yaml().unwrap();
        let parsed = SketchConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.program.commands, "FF+F");
        assert!((parsed.animation.speed - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_yaml_defaults_fill_in() {
        let config = SketchConfig::from_yaml("program:\n  commands: \"F+F\"\n").unwrap();
        assert_eq!(config.program.commands, "F+F");
        assert!((config.params.forward_px - 50.0).abs() < 1e-12);
        assert!((config.animation.speed - DRAW_SPEED).abs() < 1e-12);
    }

    #[test]
    fn test_yaml_rejects_unknown_fields() {
        let result = SketchConfig::from_yaml("turbo: true\n");
        assert!(matches!(result, Err(SketchError::YamlParse(_))));
    }

    #[test]
    fn test_yaml_rejects_zero_speed() {
        let result =
            SketchConfig::from_yaml("animation:\n  speed: 0.0\n");
        assert!(matches!(result, Err(SketchError::Validation(_))));
    }
}
