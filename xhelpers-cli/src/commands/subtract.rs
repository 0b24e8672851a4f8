//! Subtract command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Remove a leading path from another.
///
/// When `PREFIX` is not a leading part of `PATH` the path is printed
/// unchanged.
#[derive(Args)]
pub struct SubtractCommand {
    /// Path to shorten
    pub path: String,

    /// Leading path to remove
    pub prefix: String,
}

impl SubtractCommand {
    /// Execute the subtract command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rest = &global.path(&self.path) - &global.path(&self.prefix);
        println!("{}", rest.to_native());
        Ok(())
    }
}
