//! EBU PromptHelper - color palettes and prompt helpers from the command line.

use clap::{Parser, Subcommand};
use ebu_prompt_helper::cli::{
    CliResult, ColorsArgs, ConfigArgs, DateTimeArgs, DescribeArgs, PaletteArgs, TextArgs, WhenArgs,
};
use ebu_prompt_helper::config::Config;
use ebu_prompt_helper::constants::APP_BINARY_NAME;
use ebu_prompt_helper::logging;

/// EBU PromptHelper - color palettes and prompt helpers
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a color palette
    Palette(PaletteArgs),
    /// Inspect the color registry
    Colors(ColorsArgs),
    /// Prompt text utilities
    Text(TextArgs),
    /// Random time of day, season and weather
    When(WhenArgs),
    /// Random character facial traits
    Describe(DescribeArgs),
    /// Current date and time strings
    Datetime(DateTimeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Palette(args) => args.execute(),
            Self::Colors(args) => args.execute(),
            Self::Text(args) => args.execute(),
            Self::When(args) => args.execute(),
            Self::Describe(args) => args.execute(),
            Self::Datetime(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // A broken config file is reported by the command that reads it.
    let level = Config::load()
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| Config::default().logging.level);
    logging::init(cli.verbose, &level);

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.code.code());
    }
}
