//! Configuration system for xhelpers.
//!
//! Settings are layered from several sources. From highest to lowest
//! precedence:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`XHELPERS_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.xhelpers/config.yaml`)
//! 5. Built-in defaults
//!
//! The result is resolved once at startup; [`Config::resolved_style`] then
//! supplies the [`PathStyle`](crate::path::PathStyle) for new paths.
//!
//! # Examples
//!
//! ```no_run
//! use xhelpers::config::ConfigBuilder;
//! use xhelpers::path::XPath;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let path = XPath::with_style("C:/work/file.txt", config.resolved_style());
//! println!("{}", path.split_path().name);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, LOG_MODE_ENV, PATH_STYLE_ENV, TIMESTAMP_PRECISION_ENV};
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
