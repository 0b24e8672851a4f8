//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CommonCommand, CompletionsCommand, ElapsedCommand, FindCommand, JoinCommand, NowCommand,
    ParseTimeCommand, RelativeCommand, ShowConfigCommand, SplitCommand, SubtractCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use xhelpers::path::StyleSetting;

/// Path algebra and timestamp helpers.
#[derive(Parser)]
#[command(name = "xh")]
#[command(version, about = "Path algebra and timestamp helpers", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read an additional configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Path style used for path arguments
    #[arg(long, value_enum, value_name = "STYLE", global = true)]
    pub style: Option<StyleArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Path style selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    /// The platform this binary runs on
    Host,
    /// Forward slashes, no drive letters
    Posix,
    /// Backslashes and drive letters
    Windows,
}

impl From<StyleArg> for StyleSetting {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Host => Self::Host,
            StyleArg::Posix => Self::Posix,
            StyleArg::Windows => Self::Windows,
        }
    }
}

/// Output format shared by commands with structured results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key: value` lines
    #[default]
    Text,
    /// A JSON object
    Json,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a path into drive, directory, name and extension
    Split(SplitCommand),

    /// Rewrite a path relative to a home directory
    Relative(RelativeCommand),

    /// Print the common prefix of two paths
    Common(CommonCommand),

    /// Remove a leading path from another
    Subtract(SubtractCommand),

    /// Join a sub-path onto a base path
    Join(JoinCommand),

    /// Print the current time
    Now(NowCommand),

    /// Parse a timestamp and print its fields
    ParseTime(ParseTimeCommand),

    /// Print the seconds between two timestamps
    Elapsed(ElapsedCommand),

    /// List files matching a wildcard mask
    Find(FindCommand),

    /// Print the resolved configuration as YAML
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
