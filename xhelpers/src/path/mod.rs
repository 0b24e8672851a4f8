//! Text-level path manipulation.
//!
//! [`XPath`] holds a path as text and offers three groups of operations:
//!
//! - **Decomposition**: cut or replace the drive, directory, name and
//!   extension (`cut_path`, `set_ext`, `split_path`, `make_path`, ...).
//! - **Algebra**: case- and separator-insensitive equality, common prefix
//!   (`&`), difference (`-`), structural join (`concat`) and relative-path
//!   computation.
//! - **Filesystem delegation**: existence checks, folder creation, copy,
//!   move, removal and metadata queries through [`crate::fs`].
//!
//! No operation fails: missing parts come out empty and filesystem actions
//! report `false`.
//!
//! # Platform capabilities
//!
//! Whether a leading `X:` is a drive and which separator is native are
//! carried by [`PathStyle`] inside each value rather than decided at
//! compile time, so Windows paths can be handled on any host.
//!
//! # Examples
//!
//! ```
//! use xhelpers::path::XPath;
//!
//! let project = XPath::from("/home/user/project/src/main.rs");
//! let home = XPath::from("/home/user");
//!
//! let common = &project & &home;
//! assert_eq!(common, "/home/user");
//!
//! let rest = &project - &home;
//! assert_eq!(rest.as_str(), "project/src/main.rs");
//!
//! let mut relative = project.clone();
//! relative.make_relative_path(&XPath::from("/home/user/docs"));
//! assert_eq!(relative.as_str(), "../project/src/main.rs");
//! ```

mod algebra;
mod decompose;
mod delegate;
pub mod style;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use algebra::paths_equal;
pub use style::{is_slash, PathStyle, Separator, StyleSetting};
pub use types::{PathParts, XPath};
