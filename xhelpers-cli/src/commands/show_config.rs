//! Show-config command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the effective configuration as YAML.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    /// Execute the show-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        print!("{}", serde_yaml::to_string(&global.config)?);
        Ok(())
    }
}
