//! Error types for tortuga.
//!
//! All fallible operations return `Result<T, SketchError>` instead of
//! panicking. The interpreter core itself is infallible: malformed input is
//! rejected at the boundary (config loading, interactive sanitization)
//! before it can reach the replay loop.

use thiserror::Error;

/// Result type alias for tortuga operations.
pub type SketchResult<T> = Result<T, SketchError>;

/// Unified error type for all tortuga operations.
#[derive(Debug, Error)]
pub enum SketchError {
    // ===== Program Errors =====
    /// A command character outside the active alphabet.
    #[error("unknown opcode '{ch}' at position {position}")]
    UnknownOpcode {
        /// The offending character.
        ch: char,
        /// Byte offset in the command string.
        position: usize,
    },

    /// Bracket opcodes present while the alphabet excludes them.
    #[error("bracket opcode '{ch}' at position {position} (brackets disabled)")]
    BracketsDisabled {
        /// The offending bracket character.
        ch: char,
        /// Byte offset in the command string.
        position: usize,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SketchError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
