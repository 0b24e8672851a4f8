//! Join command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Join a sub-path onto a base path with exactly one separator between
/// them.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    pub base: String,

    /// Sub-path appended to the base
    pub sub: String,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let joined = global.path(&self.base).concatenated(&global.path(&self.sub));
        println!("{}", joined.to_native());
        Ok(())
    }
}
