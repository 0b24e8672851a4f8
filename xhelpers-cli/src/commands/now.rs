//! Now command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use xhelpers::Timestamp;

/// Print the current local time in the timestamp text format.
#[derive(Args)]
pub struct NowCommand {
    /// Fraction digits (defaults to the configured precision)
    #[arg(long, value_name = "DIGITS", value_parser = clap::value_parser!(u32).range(0..=9))]
    pub precision: Option<u32>,
}

impl NowCommand {
    /// Execute the now command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let precision = self
            .precision
            .and_then(|p| i32::try_from(p).ok())
            .unwrap_or_else(|| global.precision());
        let now = Timestamp::now_with_precision(precision);
        println!("{}", now.to_string_with_precision(precision));
        Ok(())
    }
}
