//! Configuration management CLI commands.

use crate::cli::common::{parse_flag, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::FamilyFilter;
use crate::palette::{PaletteKind, PaletteSize};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default palette size (3, 4 or 5)
    #[arg(long, value_name = "N")]
    size: Option<String>,

    /// Default family to prefer ("None" clears it)
    #[arg(long, value_name = "FAMILY")]
    prefer: Option<String>,

    /// Default family to avoid ("None" clears it)
    #[arg(long, value_name = "FAMILY")]
    avoid: Option<String>,

    /// Enabled palette types, comma separated (e.g. analogous,triadic)
    #[arg(long, value_name = "TYPES")]
    families: Option<String>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.size.is_none()
            && self.prefer.is_none()
            && self.avoid.is_none()
            && self.families.is_none()
            && self.log_level.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --size, --prefer, --avoid, --families, or --log-level",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(size) = &self.size {
            config.palette.size = parse_flag::<PaletteSize>(size)?;
        }
        if let Some(prefer) = &self.prefer {
            config.palette.prefer = parse_flag::<FamilyFilter>(prefer)?;
        }
        if let Some(avoid) = &self.avoid {
            config.palette.avoid = parse_flag::<FamilyFilter>(avoid)?;
        }
        if let Some(families) = &self.families {
            config.palette.enabled = families
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_flag::<PaletteKind>)
                .collect::<CliResult<_>>()?;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.trim().to_lowercase();
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let enabled: Vec<&str> = config.palette.enabled.iter().map(|k| k.label()).collect();

    println!("{APP_NAME} configuration");
    println!();
    println!("Palette:");
    println!(
        "  Enabled types: {}",
        if enabled.is_empty() {
            "(all)".to_string()
        } else {
            enabled.join(", ")
        }
    );
    println!("  Size: {}", config.palette.size);
    println!("  Prefer: {}", config.palette.prefer);
    println!("  Avoid: {}", config.palette.avoid);
    println!();
    println!("Logging:");
    println!("  Level: {}", config.logging.level);
}
