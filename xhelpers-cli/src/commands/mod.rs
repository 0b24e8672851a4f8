//! CLI command implementations.
//!
//! Path algebra:
//! - `split`: decompose a path into drive, directory, name and extension
//! - `relative`: rewrite a path relative to a home directory
//! - `common`, `subtract`, `join`: prefix, difference and concatenation
//!
//! Timestamps:
//! - `now`: current time at the configured precision
//! - `parse_time`: parse the text format and print the fields
//! - `elapsed`: difference between two timestamps
//!
//! Other:
//! - `find`: wildcard file listing
//! - `show_config`: effective configuration
//! - `completions`: shell completion scripts

pub mod common;
pub mod completions;
pub mod elapsed;
pub mod find;
pub mod join;
pub mod now;
pub mod parse_time;
pub mod relative;
pub mod show_config;
pub mod split;
pub mod subtract;

pub use common::CommonCommand;
pub use completions::CompletionsCommand;
pub use elapsed::ElapsedCommand;
pub use find::FindCommand;
pub use join::JoinCommand;
pub use now::NowCommand;
pub use parse_time::ParseTimeCommand;
pub use relative::RelativeCommand;
pub use show_config::ShowConfigCommand;
pub use split::SplitCommand;
pub use subtract::SubtractCommand;
