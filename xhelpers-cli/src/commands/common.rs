//! Common command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the longest common leading directory of two paths.
#[derive(Args)]
pub struct CommonCommand {
    /// First path
    pub left: String,

    /// Second path
    pub right: String,
}

impl CommonCommand {
    /// Execute the common command. Fails when nothing is shared.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let prefix = &global.path(&self.left) & &global.path(&self.right);
        if prefix.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "{} and {} share no common prefix",
                self.left, self.right
            )));
        }
        println!("{}", prefix.to_native());
        Ok(())
    }
}
