//! The path value type and its conversions.

use std::fmt;
use std::ops::AddAssign;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::path::style::PathStyle;

/// A filesystem path kept as text and manipulated without touching disk.
///
/// `XPath` owns its text and the [`PathStyle`] it was created with. Every
/// value derived from it (cut, set, prefix, difference) inherits the same
/// style. Separators are accepted in either direction on input; the
/// canonical in-memory separator is `/`.
///
/// Equality is case-insensitive and separator-insensitive, so `"A/b"`,
/// `"a\\B"` and `"a/b/"` are all equal. Because of that, `XPath` does not
/// implement `Hash`.
///
/// # Examples
///
/// ```
/// use xhelpers::path::XPath;
///
/// let mut path = XPath::from("/a/b/c.txt");
/// path.cut_path();
/// assert_eq!(path.as_str(), "/a/b/");
/// assert_eq!(path, "/A/B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct XPath {
    pub(crate) text: String,
    pub(crate) style: PathStyle,
}

/// The four parts produced by [`XPath::split_path`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathParts {
    /// Drive letter with colon (`"C:"`), empty when absent.
    pub drive: String,
    /// Directory segments without leading or trailing separators.
    pub dir: String,
    /// Base name without extension.
    pub name: String,
    /// Extension without the dot.
    pub ext: String,
}

impl XPath {
    /// Creates a path in the host style.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_style(text, PathStyle::host())
    }

    /// Creates a path with explicit platform capabilities.
    #[must_use]
    pub fn with_style(text: impl Into<String>, style: PathStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Builds a path from its parts, see [`XPath::make_path`].
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::path::{PathStyle, XPath};
    ///
    /// let path = XPath::from_parts("C", "dir/sub", "file", "txt", PathStyle::windows());
    /// assert_eq!(path.as_str(), "C:/dir/sub/file.txt");
    /// ```
    #[must_use]
    pub fn from_parts(drive: &str, dir: &str, name: &str, ext: &str, style: PathStyle) -> Self {
        let mut path = Self::with_style(String::new(), style);
        path.make_path(drive, dir, name, ext);
        path
    }

    /// Creates a sibling value sharing this path's style.
    pub(crate) fn derive(&self, text: impl Into<String>) -> Self {
        Self::with_style(text, self.style)
    }

    /// The path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the path and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// The platform capabilities this path was created with.
    #[must_use]
    pub const fn style(&self) -> PathStyle {
        self.style
    }

    /// Replaces the platform capabilities, keeping the text.
    pub fn set_style(&mut self, style: PathStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the whole text.
    pub fn assign(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Appends raw text with no separator handling.
    ///
    /// Use [`XPath::concat`] for a structural join.
    pub fn push_str(&mut self, sub: &str) -> &mut Self {
        self.text.push_str(sub);
        self
    }

    /// The text with separators converted to the native flavour.
    #[must_use]
    pub fn to_native(&self) -> String {
        let mut native = self.clone();
        native.canonize(self.style.separator == super::style::Separator::Backslash);
        native.text
    }

    /// Converts to a standard library path.
    #[must_use]
    pub fn to_std_path(&self) -> PathBuf {
        PathBuf::from(&self.text)
    }
}

impl fmt::Display for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for XPath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for XPath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for XPath {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&std::path::Path> for XPath {
    fn from(path: &std::path::Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl From<XPath> for String {
    fn from(path: XPath) -> Self {
        path.text
    }
}

impl AddAssign<&str> for XPath {
    fn add_assign(&mut self, sub: &str) {
        self.text.push_str(sub);
    }
}

impl AddAssign<&XPath> for XPath {
    fn add_assign(&mut self, sub: &XPath) {
        self.text.push_str(&sub.text);
    }
}

impl Serialize for XPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for XPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
