//! Color registry inspection commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{ColorFamily, ColorRegistry, RgbColor};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect the color registry
#[derive(Args, Debug)]
pub struct ColorsArgs {
    #[command(subcommand)]
    command: ColorsCommand,
}

#[derive(Subcommand, Debug)]
enum ColorsCommand {
    /// List registry colors
    List(ColorsListArgs),
    /// Find the registry color nearest to a hex code
    Closest(ColorsClosestArgs),
    /// Rotate a color's hue
    Shift(ColorsShiftArgs),
    /// List color families and their sizes
    Families(ColorsFamiliesArgs),
}

/// List registry colors
#[derive(Args, Debug)]
pub struct ColorsListArgs {
    /// Only list members of this family (e.g. greys, "Broad Neutrals")
    #[arg(long, value_name = "FAMILY")]
    family: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Find the registry color nearest to a hex code
#[derive(Args, Debug)]
pub struct ColorsClosestArgs {
    /// Hex code, with or without '#'
    #[arg(value_name = "HEX")]
    hex: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Rotate a color's hue
#[derive(Args, Debug)]
pub struct ColorsShiftArgs {
    /// Hex code, with or without '#'
    #[arg(value_name = "HEX")]
    hex: String,

    /// Degrees to rotate (may be negative)
    #[arg(value_name = "DEGREES", allow_hyphen_values = true)]
    degrees: f64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// List color families and their sizes
#[derive(Args, Debug)]
pub struct ColorsFamiliesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct ColorInfo<'a> {
    name: &'a str,
    hex: &'a str,
}

#[derive(Serialize, Debug)]
struct ShiftOutput<'a> {
    input: String,
    degrees: f64,
    hex: String,
    closest: &'a str,
}

#[derive(Serialize, Debug)]
struct FamilyInfo<'a> {
    name: &'a str,
    count: usize,
}

impl ColorsArgs {
    /// Execute colors subcommand
    pub fn execute(&self) -> CliResult<()> {
        let registry = ColorRegistry::builtin()
            .map_err(|e| CliError::io(format!("Failed to load color registry: {e}")))?;

        match &self.command {
            ColorsCommand::List(args) => args.execute(registry),
            ColorsCommand::Closest(args) => args.execute(registry),
            ColorsCommand::Shift(args) => args.execute(registry),
            ColorsCommand::Families(args) => args.execute(registry),
        }
    }
}

impl ColorsListArgs {
    fn execute(&self, registry: &ColorRegistry) -> CliResult<()> {
        let colors: Vec<ColorInfo> = match &self.family {
            Some(name) => find_family(registry, name)?
                .members
                .iter()
                .filter_map(|member| registry.get(member))
                .map(|e| ColorInfo {
                    name: &e.name,
                    hex: &e.hex,
                })
                .collect(),
            None => registry
                .entries()
                .iter()
                .map(|e| ColorInfo {
                    name: &e.name,
                    hex: &e.hex,
                })
                .collect(),
        };

        if self.json {
            return print_json(&colors);
        }
        for color in &colors {
            println!("{:<24} {}", color.name, color.hex);
        }
        Ok(())
    }
}

impl ColorsClosestArgs {
    fn execute(&self, registry: &ColorRegistry) -> CliResult<()> {
        let name = registry
            .closest_name_to_hex(&self.hex)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let hex = registry.hex(name).unwrap_or_default();

        if self.json {
            print_json(&ColorInfo { name, hex })
        } else {
            println!("{name} ({hex})");
            Ok(())
        }
    }
}

impl ColorsShiftArgs {
    fn execute(&self, registry: &ColorRegistry) -> CliResult<()> {
        let shifted = RgbColor::from_hex(&self.hex)
            .map_err(|e| CliError::validation(e.to_string()))?
            .shift_hue(self.degrees);
        let output = ShiftOutput {
            input: self.hex.clone(),
            degrees: self.degrees,
            hex: shifted.to_hex(),
            closest: registry.closest_name(shifted),
        };

        if self.json {
            print_json(&output)
        } else {
            println!("{} (closest: {})", output.hex, output.closest);
            Ok(())
        }
    }
}

impl ColorsFamiliesArgs {
    fn execute(&self, registry: &ColorRegistry) -> CliResult<()> {
        let families: Vec<FamilyInfo> = registry
            .families()
            .iter()
            .map(|f| FamilyInfo {
                name: &f.name,
                count: f.members.len(),
            })
            .collect();

        if self.json {
            return print_json(&families);
        }
        for family in &families {
            println!("{:<16} {:>3} colors", family.name, family.count);
        }
        Ok(())
    }
}

/// Case-insensitive family lookup that also accepts `-`/`_` for spaces.
fn find_family<'a>(registry: &'a ColorRegistry, name: &str) -> CliResult<&'a ColorFamily> {
    let wanted = normalize(name);
    registry
        .families()
        .iter()
        .find(|f| normalize(&f.name) == wanted)
        .ok_or_else(|| CliError::validation(format!("Unknown color family: '{name}'")))
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], " ")
}
