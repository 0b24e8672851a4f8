//! Main entry point for the `xh` CLI.
//!
//! `xh` exposes the xhelpers path algebra, timestamp model and file finder:
//! - `split`, `relative`, `common`, `subtract`, `join`: path algebra
//! - `now`, `parse-time`, `elapsed`: timestamps
//! - `find`: wildcard file listing
//! - `show-config`: the effective configuration

use clap::Parser;
use xhelpers_cli::cli::{Cli, Command};
use xhelpers_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let result = GlobalOptions::resolve(&cli).and_then(|global| {
        global.install_logger();
        match cli.command {
            Command::Split(cmd) => cmd.execute(&global),
            Command::Relative(cmd) => cmd.execute(&global),
            Command::Common(cmd) => cmd.execute(&global),
            Command::Subtract(cmd) => cmd.execute(&global),
            Command::Join(cmd) => cmd.execute(&global),
            Command::Now(cmd) => cmd.execute(&global),
            Command::ParseTime(cmd) => cmd.execute(&global),
            Command::Elapsed(cmd) => cmd.execute(&global),
            Command::Find(cmd) => cmd.execute(&global),
            Command::ShowConfig(cmd) => cmd.execute(&global),
            Command::Completions(cmd) => cmd.execute(&global),
        }
    });

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
