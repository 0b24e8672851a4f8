#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # xhelpers
//!
//! Everyday helpers for string, path and time handling.
//!
//! ## Core Types
//!
//! - [`strings`]: character classes (Latin and Cyrillic) and string
//!   operations such as trimming, splitting and template matching, numeric
//!   casts, and delimited row streams
//! - [`XPath`]: text-level path decomposition and path algebra
//! - [`Timestamp`]: nanosecond timestamps with local-time text conversion,
//!   plus the [`timestamp::Timer`] stopwatch
//! - [`fs`]: boolean filesystem facade and glob file finder
//! - [`Config`] and [`ConfigBuilder`]: layered YAML configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use xhelpers::{Timestamp, XPath};
//!
//! let mut path = XPath::from("/var/log/app/server.log");
//! path.set_ext("gz");
//! assert_eq!(path.as_str(), "/var/log/app/server.gz");
//!
//! let ts = Timestamp::from_string("2017-12-23T12:40:23.263+03:00");
//! assert_eq!(ts.nanos(), 263_000_000);
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod strings;
pub mod timestamp;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathParts, PathStyle, StyleSetting, XPath};
pub use timestamp::{Calendar, Timestamp};
