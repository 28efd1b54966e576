//! Character description commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::prompt::describer::{describe_female, describe_male, FemaleFeatures, MaleFeatures};
use clap::{Args, Subcommand};

/// Random character facial traits
#[derive(Args, Debug)]
pub struct DescribeArgs {
    #[command(subcommand)]
    command: DescribeCommand,
}

#[derive(Subcommand, Debug)]
enum DescribeCommand {
    /// Describe a female character
    Female(FeatureArgs),
    /// Describe a male character
    Male(FeatureArgs),
}

/// Seed and feature toggles shared by both descriptions
#[derive(Args, Debug)]
pub struct FeatureArgs {
    /// Seed; every value, 0 included, gives a repeatable description
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Feature to include (repeatable, e.g. makeup, neck, accessories)
    #[arg(long = "with", value_name = "FEATURE")]
    with: Vec<String>,

    /// Feature to leave out (repeatable, e.g. ears, skin)
    #[arg(long = "without", value_name = "FEATURE")]
    without: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl FeatureArgs {
    /// `(feature, enabled)` pairs, `--with` applied before `--without`.
    fn toggles(&self) -> impl Iterator<Item = (&str, bool)> {
        self.with
            .iter()
            .map(|f| (f.as_str(), true))
            .chain(self.without.iter().map(|f| (f.as_str(), false)))
    }
}

impl DescribeArgs {
    /// Execute describe subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            DescribeCommand::Female(args) => {
                let mut features = FemaleFeatures::default();
                for (name, on) in args.toggles() {
                    set_female(&mut features, name, on)?;
                }
                let description = describe_female(args.seed, &features)
                    .map_err(|e| CliError::io(e.to_string()))?;
                if args.json {
                    return print_json(&description);
                }
                println!("{}", description.face_description);
                println!();
                println!("Hair style: {}", description.hair_style);
                println!("Hair color: {}", description.hair_color);
                println!("Expression: {}", description.facial_expression);
                Ok(())
            }
            DescribeCommand::Male(args) => {
                let mut features = MaleFeatures::default();
                for (name, on) in args.toggles() {
                    set_male(&mut features, name, on)?;
                }
                let description = describe_male(args.seed, &features)
                    .map_err(|e| CliError::io(e.to_string()))?;
                if args.json {
                    return print_json(&description);
                }
                println!("{}", description.face_description);
                println!();
                println!("Hair style:  {}", description.hair_style);
                println!("Hair color:  {}", description.hair_color);
                println!("Facial hair: {}", description.facial_hair);
                println!("Expression:  {}", description.facial_expression);
                Ok(())
            }
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace(['-', ' '], "_")
}

fn unknown_feature(name: &str) -> CliError {
    CliError::validation(format!("Unknown feature: '{name}'"))
}

fn set_female(features: &mut FemaleFeatures, name: &str, on: bool) -> CliResult<()> {
    let flag = match normalize(name).as_str() {
        "eyes" => &mut features.eyes,
        "nose" => &mut features.nose,
        "mouth" => &mut features.mouth,
        "lips" => &mut features.lips,
        "face_shape" => &mut features.face_shape,
        "brow" | "eyebrows" => &mut features.brow,
        "ears" => &mut features.ears,
        "cheekbones" => &mut features.cheekbones,
        "cheeks" => &mut features.cheeks,
        "chin" | "jaw" => &mut features.chin,
        "skin" => &mut features.skin,
        "makeup" => &mut features.makeup,
        "neck" => &mut features.neck,
        "accessories" => &mut features.accessories,
        _ => return Err(unknown_feature(name)),
    };
    *flag = on;
    Ok(())
}

fn set_male(features: &mut MaleFeatures, name: &str, on: bool) -> CliResult<()> {
    let flag = match normalize(name).as_str() {
        "eyes" => &mut features.eyes,
        "nose" => &mut features.nose,
        "mouth" => &mut features.mouth,
        "face_shape" => &mut features.face_shape,
        "brow" | "eyebrows" => &mut features.brow,
        "ears" => &mut features.ears,
        "cheeks_and_cheekbones" => &mut features.cheeks_and_cheekbones,
        "cheekbones" => &mut features.cheekbones,
        "chin" | "jaw" => &mut features.chin,
        "skin" => &mut features.skin,
        "neck" => &mut features.neck,
        "accessories" => &mut features.accessories,
        _ => return Err(unknown_feature(name)),
    };
    *flag = on;
    Ok(())
}
