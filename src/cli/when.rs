//! Random "when" phrase and weather command.

use crate::cli::common::{parse_flag, print_json, CliError, CliResult};
use crate::prompt::weather::{describe_when, Skew, WhenRequest};
use crate::rng::seed_rng;
use clap::Args;

/// Random time of day, season and weather
#[derive(Args, Debug)]
pub struct WhenArgs {
    /// First year, inclusive
    #[arg(long, default_value_t = 1980, allow_hyphen_values = true)]
    year_from: i32,

    /// Last year, inclusive
    #[arg(long, default_value_t = 2025, allow_hyphen_values = true)]
    year_to: i32,

    /// Start of the time window (e.g. 6:00am)
    #[arg(long, default_value = "6:00am")]
    time_from: String,

    /// End of the time window; equal to --time-from means the whole day
    #[arg(long, default_value = "7:00pm")]
    time_to: String,

    /// Day bias: no skew, earlier of two, later of two, middle of three
    #[arg(long, default_value = "no skew")]
    year_skew: String,

    /// Time bias: no skew, earlier of two, later of two, middle of three
    #[arg(long, default_value = "no skew")]
    time_skew: String,

    /// Random seed; 0 is non-deterministic
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl WhenArgs {
    /// Execute the when command
    pub fn execute(&self) -> CliResult<()> {
        let request = WhenRequest {
            year_from: self.year_from,
            year_to: self.year_to,
            time_from: self.time_from.clone(),
            time_to: self.time_to.clone(),
            year_skew: parse_flag::<Skew>(&self.year_skew)?,
            time_skew: parse_flag::<Skew>(&self.time_skew)?,
        };

        let mut rng = seed_rng(self.seed);
        let report =
            describe_when(&request, &mut rng).map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            return print_json(&report);
        }
        println!("When:         {}", report.when);
        println!("When no year: {}", report.when_no_year);
        println!("Weather:      {}", report.weather);
        Ok(())
    }
}
