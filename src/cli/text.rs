//! Prompt text utility commands.

use crate::cli::common::{parse_flag, print_json, CliError, CliResult};
use crate::prompt::text::{
    combine, consume_list_item, randomize, read_file, replace_words, sample_list, truncate,
    Delimiter, TruncateMode,
};
use crate::rng::seed_rng;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Prompt text utilities
#[derive(Args, Debug)]
pub struct TextArgs {
    #[command(subcommand)]
    command: TextCommand,
}

#[derive(Subcommand, Debug)]
enum TextCommand {
    /// Replace words in a prompt
    Replace(ReplaceArgs),
    /// Substitute a randomly chosen option for target words
    Randomize(RandomizeArgs),
    /// Join two strings
    Combine(CombineArgs),
    /// Shuffle a list and keep a few lines
    Sample(SampleArgs),
    /// Take one random line out of a list and put it into a prompt
    Consume(ConsumeArgs),
    /// Cut a prompt at a marker
    Truncate(TruncateArgs),
    /// Print a text file
    Load(LoadArgs),
}

/// Replace words in a prompt
#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Prompt text
    text: String,

    /// Words to replace, separated by '|'
    #[arg(long, value_name = "WORDS")]
    targets: String,

    /// Replacement text
    #[arg(long = "with", value_name = "TEXT", default_value = "")]
    replacement: String,

    /// Match case exactly
    #[arg(long)]
    case_sensitive: bool,
}

/// Substitute a randomly chosen option for target words
#[derive(Args, Debug)]
pub struct RandomizeArgs {
    /// Prompt text
    text: String,

    /// Words to replace, separated by '|'
    #[arg(long, value_name = "WORDS")]
    targets: String,

    /// Options to choose from; "3>>option" weights an option
    #[arg(long, value_name = "OPTIONS")]
    options: String,

    /// Option separator: newlines, commas or semi-colons
    #[arg(long, value_name = "DELIMITER", default_value = "newlines")]
    delimiter: String,

    /// Match case exactly
    #[arg(long)]
    case_sensitive: bool,

    /// Random seed; 0 is non-deterministic
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Join two strings
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// First string
    first: String,

    /// Second string
    #[arg(default_value = "")]
    second: String,

    /// Text placed between the two
    #[arg(long, default_value = ", ")]
    joiner: String,
}

/// Shuffle a list and keep a few lines
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// List, one item per line
    list: String,

    /// Number of lines to keep
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Number the result from 1
    #[arg(long)]
    numbered: bool,

    /// Random seed; 0 is non-deterministic
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Take one random line out of a list and put it into a prompt
#[derive(Args, Debug)]
pub struct ConsumeArgs {
    /// Prompt text
    prompt: String,

    /// Text in the prompt to replace with the chosen line
    #[arg(long, value_name = "TEXT", default_value = "")]
    target: String,

    /// List, one item per line
    #[arg(long, value_name = "LIST")]
    list: String,

    /// Random seed; 0 is non-deterministic
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Cut a prompt at a marker
#[derive(Args, Debug)]
pub struct TruncateArgs {
    /// Prompt text
    prompt: String,

    /// Text to cut at
    #[arg(long, value_name = "TEXT")]
    marker: String,

    /// "delete before" or "delete after"
    #[arg(long, default_value = "delete before")]
    mode: String,

    /// Remove the marker as well
    #[arg(long)]
    inclusive: bool,
}

/// Print a text file
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Directory holding the file
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// File name inside the directory
    #[arg(value_name = "NAME")]
    name: String,
}

#[derive(Serialize, Debug)]
struct RandomizeOutput {
    text: String,
    selected: String,
}

#[derive(Serialize, Debug)]
struct ConsumeOutput {
    prompt: String,
    selected: String,
    remaining: String,
}

impl TextArgs {
    /// Execute text subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            TextCommand::Replace(args) => {
                println!(
                    "{}",
                    replace_words(&args.text, &args.targets, &args.replacement, args.case_sensitive)
                );
                Ok(())
            }
            TextCommand::Randomize(args) => args.execute(),
            TextCommand::Combine(args) => {
                println!("{}", combine(&args.first, &args.second, &args.joiner));
                Ok(())
            }
            TextCommand::Sample(args) => {
                let mut rng = seed_rng(args.seed);
                println!("{}", sample_list(&args.list, args.count, args.numbered, &mut rng));
                Ok(())
            }
            TextCommand::Consume(args) => args.execute(),
            TextCommand::Truncate(args) => {
                let mode = parse_flag::<TruncateMode>(&args.mode)?;
                println!("{}", truncate(&args.prompt, &args.marker, mode, args.inclusive));
                Ok(())
            }
            TextCommand::Load(args) => {
                let content =
                    read_file(&args.dir, &args.name).map_err(|e| CliError::io(e.to_string()))?;
                print!("{content}");
                Ok(())
            }
        }
    }
}

impl RandomizeArgs {
    fn execute(&self) -> CliResult<()> {
        let delimiter = parse_flag::<Delimiter>(&self.delimiter)?;
        let mut rng = seed_rng(self.seed);
        let (text, selected) = randomize(
            &self.text,
            &self.targets,
            &self.options,
            delimiter,
            self.case_sensitive,
            &mut rng,
        );

        if self.json {
            print_json(&RandomizeOutput { text, selected })
        } else {
            println!("{text}");
            Ok(())
        }
    }
}

impl ConsumeArgs {
    fn execute(&self) -> CliResult<()> {
        let mut rng = seed_rng(self.seed);
        let consumed = consume_list_item(&self.prompt, &self.target, &self.list, &mut rng);

        if self.json {
            print_json(&ConsumeOutput {
                prompt: consumed.prompt,
                selected: consumed.selected,
                remaining: consumed.remaining,
            })
        } else {
            println!("{}", consumed.prompt);
            Ok(())
        }
    }
}
