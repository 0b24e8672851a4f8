//! Split command implementation.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Split a path into drive, directory, name and extension.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl SplitCommand {
    /// Execute the split command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let parts = global.path(&self.path).split_path();
        match self.format {
            OutputFormat::Text => {
                println!("drive: {}", parts.drive);
                println!("dir: {}", parts.dir);
                println!("name: {}", parts.name);
                println!("ext: {}", parts.ext);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parts)?),
        }
        Ok(())
    }
}
