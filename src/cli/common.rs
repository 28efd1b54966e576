//! Shared error and parsing helpers for CLI commands.

use std::fmt;
use std::str::FromStr;

/// Process exit codes returned by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Bad input or configuration.
    Validation = 1,
    /// File system or serialization failure.
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command, printed as `Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process.
    pub code: ExitCode,
    /// Message shown to the user.
    pub message: String,
}

impl CliError {
    /// Invalid input or configuration.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a flag value, mapping parse failures to validation errors.
pub fn parse_flag<T>(value: &str) -> CliResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| CliError::validation(e.to_string()))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteSize;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").code.code(), 1);
        assert_eq!(CliError::io("disk").code.code(), 2);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag::<PaletteSize>("5").unwrap(), PaletteSize::Five);
        let err = parse_flag::<PaletteSize>("9").unwrap_err();
        assert_eq!(err.code, ExitCode::Validation);
        assert!(err.message.contains("Invalid palette size"));
    }
}
