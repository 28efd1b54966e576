//! Error types for the library layer.
//!
//! Hard input problems (malformed hex, unknown names, missing data) fail fast
//! through [`PromptError`]. Soft constraints such as palette uniqueness or
//! family preferences never surface here; they degrade to best-effort output.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, PromptError>;

/// Errors produced by the palette, color and prompt modules.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Hex input that is not exactly six hex digits after stripping `#`.
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex {
        /// The offending input as given.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Static data cannot satisfy a generator (e.g. too few greys).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Color name not present in the registry.
    #[error("Unknown color: '{0}'")]
    UnknownColor(String),

    /// Family name not present in the registry or selector list.
    #[error("Unknown color family: '{0}'")]
    UnknownFamily(String),

    /// Palette type label not recognized.
    #[error("Unknown palette type: '{0}'")]
    UnknownPaletteKind(String),

    /// Palette size outside 3..=5, as given.
    #[error("Invalid palette size: '{0}' (expected 3, 4 or 5)")]
    InvalidPaletteSize(String),

    /// Time string that does not parse as `h:mmam`/`h:mmpm`.
    #[error("Invalid time '{0}'. Expected a 12-hour time such as 6:00am")]
    InvalidTime(String),

    /// Year range with `from` after `to`.
    #[error("Invalid year range: {from} to {to}")]
    InvalidYearRange {
        /// First year of the range.
        from: i32,
        /// Last year of the range.
        to: i32,
    },

    /// Embedded JSON data failed to parse.
    #[error("Failed to parse embedded data: {0}")]
    Data(#[from] serde_json::Error),

    /// File could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl PromptError {
    pub(crate) fn invalid_hex(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
