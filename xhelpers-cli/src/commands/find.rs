//! Find command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::io::{self, Write};
use xhelpers::fs::FileFinder;

/// List files matching a wildcard mask.
///
/// The last segment of `MASK` may contain `*` and `?`; entries are listed
/// in name order. Hidden entries only match patterns starting with `.`.
#[derive(Args)]
pub struct FindCommand {
    /// Directory and pattern, e.g. `logs/*.txt`
    pub mask: String,

    /// Also print size and last write time
    #[arg(long, short)]
    pub long: bool,
}

impl FindCommand {
    /// Execute the find command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.mask.trim().is_empty() {
            return Err(CliError::InvalidArguments("mask must not be empty".into()));
        }

        let precision = global.precision();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut count = 0_usize;
        for info in FileFinder::new(&self.mask) {
            count += 1;
            if self.long {
                let kind = if info.is_subdir() { 'd' } else { '-' };
                writeln!(
                    out,
                    "{kind} {:>12} {} {}",
                    info.size(),
                    info.write_time().to_string_with_precision(precision),
                    info.path()
                )?;
            } else {
                writeln!(out, "{}", info.path())?;
            }
        }
        log::info!("{count} entries match {}", self.mask);
        Ok(())
    }
}
