//! CLI command handlers for EBU PromptHelper.
//!
//! Each subcommand parses its flags with clap, calls into the library and
//! prints plain text or JSON on stdout. Failures map to a [`CliError`] whose
//! exit code separates bad input from I/O trouble.

pub mod colors;
pub mod common;
pub mod config;
pub mod datetime;
pub mod describe;
pub mod palette;
pub mod text;
pub mod when;

// Re-export types used by main.rs and tests
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use datetime::DateTimeArgs;
pub use describe::DescribeArgs;
pub use palette::PaletteArgs;
pub use text::TextArgs;
pub use when::WhenArgs;
