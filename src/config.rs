//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::FamilyFilter;
use crate::palette::{PaletteKind, PaletteRequest, PaletteSize};

/// Palette defaults used when the command line leaves a setting out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Enabled palette types (empty means all)
    pub enabled: Vec<PaletteKind>,
    /// Number of colors (3, 4 or 5)
    pub size: PaletteSize,
    /// Family to prefer
    pub prefer: FamilyFilter,
    /// Family to avoid
    pub avoid: FamilyFilter,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            enabled: PaletteKind::ALL.to_vec(),
            size: PaletteSize::default(),
            prefer: FamilyFilter::None,
            avoid: FamilyFilter::None,
        }
    }
}

impl PaletteConfig {
    /// Selector request built from these defaults.
    #[must_use]
    pub fn to_request(&self, seed: u64) -> PaletteRequest {
        PaletteRequest {
            kinds: self.enabled.clone(),
            size: self.size,
            prefer: self.prefer,
            avoid: self.avoid,
            seed,
        }
    }
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/EbuPromptHelper/config.toml`
/// - macOS: `~/Library/Application Support/EbuPromptHelper/config.toml`
/// - Windows: `%APPDATA%\EbuPromptHelper\config.toml`
///
/// `EBU_PROMPT_HELPER_CONFIG_DIR` replaces the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Palette defaults
    pub palette: PaletteConfig,
    /// Logging preferences
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$EBU_PROMPT_HELPER_CONFIG_DIR` when set and non-empty
    /// - Linux: `~/.config/EbuPromptHelper/`
    /// - macOS: `~/Library/Application Support/EbuPromptHelper/`
    /// - Windows: `%APPDATA%\EbuPromptHelper\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path`.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `logging.level` is a known level
    /// - no palette type is listed twice
    pub fn validate(&self) -> Result<()> {
        self.logging
            .level
            .parse::<tracing::Level>()
            .map_err(|_| {
                anyhow::anyhow!(
                    "Invalid log level '{}'. Must be trace, debug, info, warn or error",
                    self.logging.level
                )
            })?;

        for (i, kind) in self.palette.enabled.iter().enumerate() {
            if self.palette.enabled[..i].contains(kind) {
                anyhow::bail!("Palette type '{kind}' is listed more than once");
            }
        }

        Ok(())
    }
}
