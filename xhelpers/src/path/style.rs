//! Platform capabilities that influence path composition.
//!
//! Instead of compiling different code per target, the drive-letter concept
//! and the native separator are carried as a small `Copy` value. It is
//! resolved once (usually from configuration at startup) and handed to every
//! [`XPath`](super::XPath) created afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical in-memory separator.
pub const CANONICAL_SEPARATOR: char = '/';

/// Every character accepted as a directory separator on input.
pub const SEPARATORS: &str = "\\/";

/// Returns `true` for `/` and `\`.
#[must_use]
pub fn is_slash(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Returns `true` for a separator or for the end of the text (`None`).
#[must_use]
pub fn is_end_slash(c: Option<char>) -> bool {
    c.map_or(true, is_slash)
}

/// Native separator flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Forward slash, `/`.
    Slash,
    /// Backslash, `\`.
    Backslash,
}

impl Separator {
    /// The separator as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }
}

/// Path capabilities of a target platform.
///
/// # Examples
///
/// ```
/// use xhelpers::path::{PathStyle, Separator};
///
/// let windows = PathStyle::windows();
/// assert!(windows.drive_concept);
/// assert_eq!(windows.separator, Separator::Backslash);
///
/// let posix = PathStyle::posix();
/// assert!(!posix.drive_concept);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStyle {
    /// Separator used when converting to native form.
    pub separator: Separator,
    /// Whether a leading `X:` is recognized as a drive.
    pub drive_concept: bool,
}

impl PathStyle {
    /// POSIX: forward slashes, no drives.
    #[must_use]
    pub const fn posix() -> Self {
        Self {
            separator: Separator::Slash,
            drive_concept: false,
        }
    }

    /// Windows: backslashes natively, drive letters recognized.
    #[must_use]
    pub const fn windows() -> Self {
        Self {
            separator: Separator::Backslash,
            drive_concept: true,
        }
    }

    /// The style of the platform this binary was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::posix()
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::host()
    }
}

/// Named style selection, as written in configuration files and on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    /// Whatever the host platform uses.
    #[default]
    Host,
    /// [`PathStyle::posix`].
    Posix,
    /// [`PathStyle::windows`].
    Windows,
}

impl StyleSetting {
    /// Resolves the setting to concrete capabilities.
    #[must_use]
    pub const fn resolve(self) -> PathStyle {
        match self {
            Self::Host => PathStyle::host(),
            Self::Posix => PathStyle::posix(),
            Self::Windows => PathStyle::windows(),
        }
    }
}

impl fmt::Display for StyleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for StyleSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" => Ok(Self::Host),
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win" => Ok(Self::Windows),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}
