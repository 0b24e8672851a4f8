//! Environment variable handling for configuration overrides.
//!
//! `XHELPERS_PATH_STYLE`, `XHELPERS_TIMESTAMP_PRECISION` and
//! `XHELPERS_LOG_MODE` override values from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::path::StyleSetting;

/// Overrides `path_style`.
pub const PATH_STYLE_ENV: &str = "XHELPERS_PATH_STYLE";

/// Overrides `timestamp_precision`.
pub const TIMESTAMP_PRECISION_ENV: &str = "XHELPERS_TIMESTAMP_PRECISION";

/// Overrides `log_mode`.
pub const LOG_MODE_ENV: &str = "XHELPERS_LOG_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use xhelpers::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the variable if any value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(style) = env::var(PATH_STYLE_ENV) {
            config.path_style = Some(style.parse::<StyleSetting>().map_err(|message| {
                Error::Validation {
                    field: PATH_STYLE_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(precision) = env::var(TIMESTAMP_PRECISION_ENV) {
            config.timestamp_precision =
                Some(precision.trim().parse().map_err(|_| Error::Validation {
                    field: TIMESTAMP_PRECISION_ENV.into(),
                    message: "Must be a non-negative integer".into(),
                })?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }
}
