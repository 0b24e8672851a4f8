//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::path::{PathStyle, StyleSetting};
use crate::timestamp::DEFAULT_PRECISION;

/// Largest meaningful timestamp precision (nanoseconds).
pub const MAX_TIMESTAMP_PRECISION: u32 = 9;

/// Complete configuration structure.
///
/// Every field is optional so that partial files and overrides can be
/// layered; [`Config::defaults`] fills all of them.
///
/// # Examples
///
/// ```
/// use xhelpers::config::Config;
/// use xhelpers::path::StyleSetting;
///
/// let config = Config {
///     path_style: Some(StyleSetting::Windows),
///     ..Default::default()
/// };
/// assert!(config.resolved_style().drive_concept);
/// assert_eq!(config.precision(), 3);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path capabilities used for paths built from user input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_style: Option<StyleSetting>,

    /// Fractional digits used when reading the clock and formatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_precision: Option<u32>,

    /// Diagnostic verbosity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// Built-in defaults: host style, millisecond precision, normal logging.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            path_style: Some(StyleSetting::Host),
            timestamp_precision: Some(DEFAULT_PRECISION.unsigned_abs()),
            log_mode: Some(LogLevel::Normal),
        }
    }

    /// The concrete path capabilities to hand to every new path.
    #[must_use]
    pub fn resolved_style(&self) -> PathStyle {
        self.path_style.unwrap_or_default().resolve()
    }

    /// Timestamp precision as accepted by the timestamp API.
    #[must_use]
    pub fn precision(&self) -> i32 {
        self.timestamp_precision
            .and_then(|p| i32::try_from(p).ok())
            .unwrap_or(DEFAULT_PRECISION)
    }

    /// Log level, defaulting to normal.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_everything() {
        let config = Config::defaults();
        assert_eq!(config.path_style, Some(StyleSetting::Host));
        assert_eq!(config.timestamp_precision, Some(3));
        assert_eq!(config.log_mode, Some(LogLevel::Normal));
        assert_eq!(config.resolved_style(), PathStyle::host());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "path_style: windows\ntimestamp_precision: 6\nlog_mode: verbose\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.path_style, Some(StyleSetting::Windows));
        assert_eq!(config.precision(), 6);
        assert_eq!(config.log_level(), LogLevel::Verbose);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_yaml::from_str::<Config>("colour: blue\n").is_err());
    }

    #[test]
    fn test_empty_fields_not_serialized() {
        let yaml = serde_yaml::to_string(&Config {
            timestamp_precision: Some(2),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(yaml.trim(), "timestamp_precision: 2");
    }
}
