//! Integration tests for the xh CLI surface: help, version and
//! completions.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let env = TestEnv::new();
    env.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xh"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_lists_commands() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Path algebra and timestamp helpers"))
        .stdout(predicate::str::contains("relative"))
        .stdout(predicate::str::contains("parse-time"));
}

#[test]
fn test_unknown_style_rejected_by_parser() {
    let env = TestEnv::new();
    env.command()
        .args(["--style", "amiga", "split", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amiga"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xh"));
}
