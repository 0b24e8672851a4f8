//! Path algebra: equality, common prefix, difference, structural join and
//! relative-path computation.
//!
//! Two paths are compared character by character, ignoring case. At any
//! position where both sides sit on a separator (or on the end of the text)
//! they agree regardless of which separator is used. The common prefix is
//! cut right after the last such shared boundary.

use std::ops::{BitAnd, BitAndAssign, Sub, SubAssign};

use crate::fs;
use crate::path::style::{is_end_slash, is_slash, SEPARATORS};
use crate::path::types::XPath;
use crate::strings::{eq_ignore_case, erase_sym_left, erase_sym_right};

/// Result of walking two paths in lockstep.
struct Walk {
    /// Byte offset in the left path just past the last shared boundary.
    boundary: usize,
    /// Whether the walk reached the end of the left path without mismatch.
    complete: bool,
}

fn chars_agree(a: Option<char>, b: Option<char>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => eq_ignore_case(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn walk(left: &str, right: &str) -> Walk {
    let mut left_chars = left.char_indices();
    let mut right_chars = right.chars();
    let mut boundary = 0;

    loop {
        let (pos, a) = match left_chars.next() {
            Some((pos, c)) => (pos, Some(c)),
            None => (left.len(), None),
        };
        let b = right_chars.next();

        let at_slash = is_end_slash(a) && is_end_slash(b);
        if at_slash {
            boundary = (pos + a.map_or(0, char::len_utf8)).min(left.len());
        }
        if !(at_slash || chars_agree(a, b)) {
            return Walk {
                boundary,
                complete: false,
            };
        }
        if a.is_none() {
            return Walk {
                boundary,
                complete: true,
            };
        }
    }
}

/// Case- and separator-insensitive path comparison.
///
/// # Examples
///
/// ```
/// use xhelpers::path::paths_equal;
///
/// assert!(paths_equal("a/b", "A\\B"));
/// assert!(paths_equal("a/b", "a/b/"));
/// assert!(!paths_equal("a/b", "a/bc"));
/// ```
#[must_use]
pub fn paths_equal(left: &str, right: &str) -> bool {
    let mut left_chars = left.chars();
    let mut right_chars = right.chars();
    loop {
        let a = left_chars.next();
        let b = right_chars.next();
        if a.is_none() && b.is_none() {
            return true;
        }
        if !(chars_agree(a, b) || (is_end_slash(a) && is_end_slash(b))) {
            return false;
        }
    }
}

impl XPath {
    /// Truncates to the longest separator-aligned prefix shared with `other`.
    pub fn common_prefix(&mut self, other: &XPath) -> &mut Self {
        let walk = walk(&self.text, &other.text);
        if !walk.complete {
            self.text.truncate(walk.boundary);
        }
        self
    }

    /// Removes the prefix shared with `other`, then any leading separators.
    pub fn difference(&mut self, other: &XPath) -> &mut Self {
        let walk = walk(&self.text, &other.text);
        let rest = erase_sym_left(&self.text[walk.boundary..], SEPARATORS).to_string();
        self.text = rest;
        self
    }

    /// Structural join: ensures a separator between `self` and `sub`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::path::XPath;
    ///
    /// let mut path = XPath::from("a/b");
    /// path.concat(&XPath::from("/c/d"));
    /// assert_eq!(path.as_str(), "a/b/c/d");
    /// ```
    pub fn concat(&mut self, sub: &XPath) -> &mut Self {
        self.check_slash();
        self.text.push_str(erase_sym_left(&sub.text, SEPARATORS));
        self
    }

    /// Owned form of [`XPath::concat`].
    #[must_use]
    pub fn concatenated(&self, sub: &XPath) -> XPath {
        let mut joined = self.clone();
        joined.concat(sub);
        joined
    }

    /// `true` for `X:...`, `/...` and `\\...` paths of at least two
    /// characters.
    #[must_use]
    pub fn is_absolute_path(&self) -> bool {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(first), Some(second)) => {
                second == ':' || first == '/' || (first == '\\' && second == '\\')
            }
            _ => false,
        }
    }

    /// `true` for non-empty, non-absolute paths. The empty path is neither
    /// absolute nor relative.
    #[must_use]
    pub fn is_relative_path(&self) -> bool {
        !self.text.is_empty() && !self.is_absolute_path()
    }

    /// `true` for UNC-style paths starting with two separators.
    #[must_use]
    pub fn is_network_path(&self) -> bool {
        let mut chars = self.text.chars();
        matches!((chars.next(), chars.next()), (Some(a), Some(b)) if is_slash(a) && is_slash(b))
    }

    /// Replaces the path with one `../` per segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::path::XPath;
    ///
    /// let mut path = XPath::from("a/b/c/");
    /// assert_eq!(path.dot_path().as_str(), "../../../");
    /// ```
    pub fn dot_path(&mut self) -> &mut Self {
        let trimmed = erase_sym_right(&self.text, SEPARATORS);
        let mut dots = String::new();
        let mut in_segment = false;
        for c in trimmed.chars().map(Some).chain(std::iter::once(None)) {
            let at_slash = is_end_slash(c);
            if at_slash && in_segment {
                dots.push_str("../");
            }
            in_segment = !at_slash;
        }
        self.text = dots;
        self
    }

    /// Makes a relative path absolute by joining it onto `home`.
    ///
    /// Network paths, absolute paths and relative homes leave the value
    /// unchanged.
    pub fn full_path_name_in(&mut self, home: &XPath) -> &mut Self {
        if self.is_relative_path() && !self.is_network_path() {
            if home.is_relative_path() {
                return self;
            }
            *self = home.concatenated(self);
            self.full_path_name();
        }
        self
    }

    /// Rewrites the path relative to `home`.
    ///
    /// A relative value is first resolved against `home`. If the two share
    /// no prefix the value is left as is. A path equal to `home` becomes
    /// `"./"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::path::XPath;
    ///
    /// let mut path = XPath::from("/home/user/project/src");
    /// path.make_relative_path(&XPath::from("/home/user/docs"));
    /// assert_eq!(path.as_str(), "../project/src");
    /// ```
    pub fn make_relative_path(&mut self, home: &XPath) -> &mut Self {
        self.full_path_name_in(home);

        let mut home = home.clone();
        home.check_slash();

        let mut root = &home & &*self;
        if root.is_empty() {
            log::debug!("no common root between {} and {}", self, home);
            return self;
        }
        root.check_slash();

        let mut up = &home - &root;
        up.dot_path();
        let down = &*self - &root;

        *self = up.concatenated(&down);
        if self.is_empty() {
            self.text.push_str("./");
        }
        self
    }

    /// Rewrites the path relative to the current working directory.
    pub fn make_relative_path_to_cwd(&mut self) -> &mut Self {
        let cwd = XPath::with_style(fs::current_directory(), self.style);
        self.make_relative_path(&cwd)
    }
}

impl PartialEq for XPath {
    fn eq(&self, other: &Self) -> bool {
        paths_equal(&self.text, &other.text)
    }
}

impl Eq for XPath {}

impl PartialEq<str> for XPath {
    fn eq(&self, other: &str) -> bool {
        paths_equal(&self.text, other)
    }
}

impl PartialEq<&str> for XPath {
    fn eq(&self, other: &&str) -> bool {
        paths_equal(&self.text, other)
    }
}

impl PartialEq<String> for XPath {
    fn eq(&self, other: &String) -> bool {
        paths_equal(&self.text, other)
    }
}

impl BitAndAssign<&XPath> for XPath {
    fn bitand_assign(&mut self, rhs: &XPath) {
        self.common_prefix(rhs);
    }
}

impl BitAnd<&XPath> for &XPath {
    type Output = XPath;

    fn bitand(self, rhs: &XPath) -> XPath {
        let mut prefix = self.clone();
        prefix.common_prefix(rhs);
        prefix
    }
}

impl BitAnd for XPath {
    type Output = XPath;

    fn bitand(mut self, rhs: XPath) -> XPath {
        self.common_prefix(&rhs);
        self
    }
}

impl SubAssign<&XPath> for XPath {
    fn sub_assign(&mut self, rhs: &XPath) {
        self.difference(rhs);
    }
}

impl Sub<&XPath> for &XPath {
    type Output = XPath;

    fn sub(self, rhs: &XPath) -> XPath {
        let mut rest = self.clone();
        rest.difference(rhs);
        rest
    }
}

impl Sub for XPath {
    type Output = XPath;

    fn sub(mut self, rhs: XPath) -> XPath {
        self.difference(&rhs);
        self
    }
}
