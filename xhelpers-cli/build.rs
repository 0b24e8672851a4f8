//! Build script for xhelpers-cli.
//!
//! Generates the `xh.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here in its minimal form.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("xh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Path algebra and timestamp helpers")
        .long_about(
            "Command-line access to the xhelpers path algebra, timestamp model and file finder",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read an additional configuration file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Path style used for path arguments")
                .value_name("STYLE")
                .value_parser(["host", "posix", "windows"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("split")
                .about("Split a path into drive, directory, name and extension"),
            Command::new("relative").about("Rewrite a path relative to a home directory"),
            Command::new("common").about("Print the common prefix of two paths"),
            Command::new("subtract").about("Remove a leading path from another"),
            Command::new("join").about("Join a sub-path onto a base path"),
            Command::new("now").about("Print the current time"),
            Command::new("parse-time").about("Parse a timestamp and print its fields"),
            Command::new("elapsed").about("Print the seconds between two timestamps"),
            Command::new("find").about("List files matching a wildcard mask"),
            Command::new("show-config").about("Print the resolved configuration"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("xh.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
