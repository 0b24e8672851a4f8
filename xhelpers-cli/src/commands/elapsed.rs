//! Elapsed command implementation.

use crate::error::CliError;
use crate::utils::{format_elapsed, parse_timestamp, GlobalOptions};
use clap::Args;
use xhelpers::Timestamp;

/// Print `STOP - START` in seconds with nine fraction digits.
#[derive(Args)]
pub struct ElapsedCommand {
    /// Start timestamp
    pub start: String,

    /// Stop timestamp
    pub stop: String,
}

impl ElapsedCommand {
    /// Execute the elapsed command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let start = parse_timestamp(&self.start)?;
        let stop = parse_timestamp(&self.stop)?;
        println!("{}", format_elapsed(&Timestamp::diff(&start, &stop)));
        Ok(())
    }
}
