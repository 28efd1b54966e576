//! Current date and time command.

use crate::cli::common::{print_json, CliResult};
use crate::prompt::datetime::DateTimeStrings;
use clap::Args;

/// Current date and time strings
#[derive(Args, Debug)]
pub struct DateTimeArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl DateTimeArgs {
    /// Execute the datetime command
    pub fn execute(&self) -> CliResult<()> {
        let now = DateTimeStrings::now();
        if self.json {
            return print_json(&now);
        }
        println!("Date:      {}", now.date);
        println!("Time:      {}", now.time);
        println!("Date-time: {}", now.datetime);
        println!("Filename:  {}", now.datetime_for_filename);
        Ok(())
    }
}
