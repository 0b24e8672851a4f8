//! Configuration validation.

use crate::config::schema::{Config, MAX_TIMESTAMP_PRECISION};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use xhelpers::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
///
/// let bad = Config { timestamp_precision: Some(12), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the precision exceeds nine digits.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(precision) = config.timestamp_precision {
            Self::validate_precision(precision)?;
        }
        Ok(())
    }

    /// Validate a timestamp precision.
    ///
    /// # Errors
    ///
    /// Returns a validation error outside `0..=9`.
    pub fn validate_precision(precision: u32) -> Result<()> {
        if precision > MAX_TIMESTAMP_PRECISION {
            return Err(Error::Validation {
                field: "timestamp_precision".into(),
                message: format!(
                    "must be between 0 and {MAX_TIMESTAMP_PRECISION}, got {precision}"
                ),
            });
        }
        Ok(())
    }
}
