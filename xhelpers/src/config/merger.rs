//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use xhelpers::config::{Config, ConfigMerger};
///
/// let low = Config { timestamp_precision: Some(3), ..Default::default() };
/// let high = Config { timestamp_precision: Some(6), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.timestamp_precision, Some(6));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence, on top of
    /// the built-in defaults.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::defaults();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every `Some` in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.path_style.is_some() {
            target.path_style = source.path_style;
        }

        if source.timestamp_precision.is_some() {
            target.timestamp_precision = source.timestamp_precision;
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }
    }
}
