//! Relative command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Rewrite a path relative to a home directory.
///
/// A relative `PATH` is first resolved against the home directory. Paths
/// that share no prefix with the home directory are printed unchanged.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path to rewrite
    pub path: String,

    /// Home directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub home: Option<String>,
}

impl RelativeCommand {
    /// Execute the relative command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut path = global.path(&self.path);
        match &self.home {
            Some(home) => {
                let home = global.path(home);
                if home.is_relative_path() {
                    return Err(CliError::InvalidArguments(format!(
                        "home directory must be absolute: {home}"
                    )));
                }
                path.make_relative_path(&home);
            }
            None => {
                path.make_relative_path_to_cwd();
            }
        }
        println!("{}", path.to_native());
        Ok(())
    }
}
