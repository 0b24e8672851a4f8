//! Parse-time command implementation.
//!
//! Parses the `YYYY-MM-DDTHH:MM:SS[.fraction]±HH:MM` format and prints
//! the instant together with its local calendar fields.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::{parse_timestamp, GlobalOptions};
use clap::Args;
use serde::Serialize;
use xhelpers::Timestamp;

/// Parse a timestamp and print its fields.
#[derive(Args)]
pub struct ParseTimeCommand {
    /// Timestamp text, e.g. 2017-12-23T16:40:23.5+03:00
    pub text: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct TimeFields {
    seconds: i64,
    nanos: u32,
    local: String,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    zone: String,
}

impl From<&Timestamp> for TimeFields {
    fn from(stamp: &Timestamp) -> Self {
        let local = stamp.to_string_with_precision(9);
        let zone = local
            .get(local.len().saturating_sub(6)..)
            .unwrap_or_default()
            .to_string();
        Self {
            seconds: stamp.seconds(),
            nanos: stamp.nanos(),
            year: stamp.year() + 1900,
            month: stamp.mon() + 1,
            day: stamp.day(),
            hour: stamp.hour(),
            minute: stamp.minute(),
            second: stamp.sec(),
            zone,
            local,
        }
    }
}

impl ParseTimeCommand {
    /// Execute the parse-time command. Unparsable text is a semantic
    /// failure.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let stamp = parse_timestamp(&self.text)?;
        let fields = TimeFields::from(&stamp);
        log::debug!("parsed {:?} as {fields:?}", self.text);

        match self.format {
            OutputFormat::Text => {
                println!("seconds: {}", fields.seconds);
                println!("nanos: {}", fields.nanos);
                println!("local: {}", fields.local);
                println!(
                    "date: {:04}-{:02}-{:02}",
                    fields.year, fields.month, fields.day
                );
                println!(
                    "time: {:02}:{:02}:{:02}",
                    fields.hour, fields.minute, fields.second
                );
                println!("zone: {}", fields.zone);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fields)?),
        }
        Ok(())
    }
}
