//! Palette generation command.

use crate::cli::common::{parse_flag, print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{ColorRegistry, FamilyFilter};
use crate::palette::{select_palette, PaletteKind, PaletteOutput, PaletteSize, OUTPUT_SLOTS};
use clap::Args;

/// Generate a color palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Palette type to enable (repeatable; defaults to the configured list)
    #[arg(long = "family", visible_alias = "kind", value_name = "TYPE")]
    families: Vec<String>,

    /// Number of colors: 3, 4 or 5
    #[arg(long, value_name = "N")]
    size: Option<String>,

    /// Color family the palette should include (e.g. "Warm Colors", greys)
    #[arg(long, value_name = "FAMILY")]
    prefer: Option<String>,

    /// Color family the palette should leave out
    #[arg(long, value_name = "FAMILY")]
    avoid: Option<String>,

    /// Random seed; 0 picks a new palette every run
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let mut request = config.palette.to_request(self.seed);
        if !self.families.is_empty() {
            request.kinds = self
                .families
                .iter()
                .map(|s| parse_flag::<PaletteKind>(s))
                .collect::<CliResult<_>>()?;
        }
        if let Some(size) = &self.size {
            request.size = parse_flag::<PaletteSize>(size)?;
        }
        if let Some(prefer) = &self.prefer {
            request.prefer = parse_flag::<FamilyFilter>(prefer)?;
        }
        if let Some(avoid) = &self.avoid {
            request.avoid = parse_flag::<FamilyFilter>(avoid)?;
        }

        let registry = ColorRegistry::builtin()
            .map_err(|e| CliError::io(format!("Failed to load color registry: {e}")))?;
        let selection = select_palette(registry, &request)
            .map_err(|e| CliError::validation(format!("Failed to generate palette: {e}")))?;
        let output = selection.to_output(registry);

        if self.json {
            print_json(&output)
        } else {
            print_palette(&output);
            Ok(())
        }
    }
}

fn print_palette(output: &PaletteOutput) {
    println!("Palette: {}", output.palette);
    println!("Type:    {}", output.palette_type);
    println!("Hex:     {}", output.hex_values);
    println!();
    for (i, color) in output.colors.iter().take(OUTPUT_SLOTS).enumerate() {
        if color.is_empty() {
            println!("  color_{}: -", i + 1);
        } else {
            println!("  color_{}: {color}", i + 1);
        }
    }
    if !output.constraints_met {
        println!();
        println!("Note: the prefer/avoid constraints could not be met.");
    }
}
