//! Utility functions for CLI operations.
//!
//! This module holds the resolved global options shared by every command,
//! along with helpers for turning arguments into library values.

use crate::cli::Cli;
use crate::error::CliError;
use xhelpers::config::{Config, ConfigBuilder};
use xhelpers::path::XPath;
use xhelpers::timestamp::MAX_NANO;
use xhelpers::{LogLevel, Logger, Timestamp};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Effective configuration after files, environment and flags.
    pub config: Config,
}

impl GlobalOptions {
    /// Resolves the configuration for this invocation.
    ///
    /// Configuration is merged from multiple sources with precedence:
    /// 1. Global options (highest priority)
    /// 2. Environment variables
    /// 3. The `--config` file, then the user file
    /// 4. Built-in defaults (lowest priority)
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let mut builder = ConfigBuilder::new();
        if let Some(path) = &cli.config {
            builder = builder.with_config_file(path);
        }
        if let Some(style) = cli.style {
            builder = builder.with_config(Config {
                path_style: Some(style.into()),
                ..Config::default()
            });
        }

        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            config,
        })
    }

    /// The stderr logger for this invocation. `--verbose` wins over
    /// `--quiet`, and either wins over the configured mode.
    pub fn logger(&self) -> Logger {
        xhelpers::init_logger(self.verbose, self.quiet, self.config.log_level())
    }

    /// Verbosity after flags and configuration.
    pub fn log_level(&self) -> LogLevel {
        self.logger().level()
    }

    /// Registers the stderr logger as the `log` backend.
    pub fn install_logger(&self) {
        if let Err(e) = self.logger().install() {
            eprintln!("WARN: logger already installed: {e}");
        }
        log::debug!(
            "path style {}, timestamp precision {}",
            self.config.path_style.unwrap_or_default(),
            self.config.precision()
        );
    }

    /// A path argument in the configured style.
    pub fn path(&self, text: &str) -> XPath {
        XPath::with_style(text, self.config.resolved_style())
    }

    /// Digits used when printing timestamps.
    pub fn precision(&self) -> i32 {
        self.config.precision()
    }
}

/// Parses a timestamp argument, treating the null sentinel as a failure.
pub fn parse_timestamp(text: &str) -> Result<Timestamp, CliError> {
    let stamp = Timestamp::from_string(text);
    if stamp.is_null() {
        return Err(CliError::SemanticFailure(format!(
            "cannot parse timestamp: {text:?}"
        )));
    }
    Ok(stamp)
}

/// Formats a duration as `S.NNNNNNNNN` with a leading `-` when negative.
pub fn format_elapsed(span: &Timestamp) -> String {
    let (seconds, nanos) = (span.seconds(), i64::from(span.nanos()));
    if seconds < 0 && nanos > 0 {
        format!("-{}.{:09}", -(seconds + 1), MAX_NANO - nanos)
    } else {
        format!("{seconds}.{nanos:09}")
    }
}
