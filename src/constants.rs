//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "EBU PromptHelper";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "ebu-prompt-helper";

/// Directory under the platform config dir that holds `config.toml`.
pub const CONFIG_DIR_NAME: &str = "EbuPromptHelper";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "EBU_PROMPT_HELPER_CONFIG_DIR";
