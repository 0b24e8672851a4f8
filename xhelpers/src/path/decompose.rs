//! Decomposition of a path into drive, directory, name and extension, and
//! reconstruction from those parts.
//!
//! All operations mutate the value in place and return `&mut Self` so calls
//! can be chained. None of them fail: missing parts simply come out empty.

use crate::path::style::{is_slash, CANONICAL_SEPARATOR, SEPARATORS};
use crate::path::types::{PathParts, XPath};
use crate::strings::{change_sym, erase_sym_left, erase_sym_right};

/// Byte offset just past the last separator, or `0` if there is none.
fn name_start(text: &str) -> usize {
    text.rfind(is_slash).map_or(0, |idx| idx + 1)
}

/// Byte offset of the extension dot inside the name part, if any.
///
/// A dot at the very start of the name marks a dotfile, not an extension.
fn ext_dot(text: &str) -> Option<usize> {
    let start = name_start(text);
    match text[start..].rfind('.') {
        Some(0) | None => None,
        Some(off) => Some(start + off),
    }
}

fn has_drive(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some() && chars.next() == Some(':')
}

impl XPath {
    /// Converts every separator to `\` (`use_backslash`) or to `/`.
    pub fn canonize(&mut self, use_backslash: bool) -> &mut Self {
        self.text = if use_backslash {
            change_sym(&self.text, "/", "\\")
        } else {
            change_sym(&self.text, "\\", "/")
        };
        self
    }

    /// Appends `/` unless the path is empty or already ends with a
    /// separator.
    pub fn check_slash(&mut self) -> &mut Self {
        if !self.text.is_empty() && !self.text.ends_with(is_slash) {
            self.text.push(CANONICAL_SEPARATOR);
        }
        self
    }

    /// Removes all trailing separators.
    pub fn strip_slash(&mut self) -> &mut Self {
        let len = erase_sym_right(&self.text, SEPARATORS).len();
        self.text.truncate(len);
        self
    }

    /// Keeps only the directory part, including its trailing separator.
    ///
    /// A path without any separator becomes empty.
    pub fn cut_path(&mut self) -> &mut Self {
        let start = name_start(&self.text);
        self.text.truncate(start);
        self.check_slash()
    }

    /// Keeps only the file name with its extension.
    pub fn cut_name_ex(&mut self) -> &mut Self {
        let start = name_start(&self.text);
        self.text.drain(..start);
        self
    }

    /// Keeps only the base name, without directory or extension.
    pub fn cut_name(&mut self) -> &mut Self {
        let end = ext_dot(&self.text).unwrap_or(self.text.len());
        self.text.truncate(end);
        self.cut_name_ex()
    }

    /// Keeps only the extension, without the dot.
    ///
    /// Dotfiles such as `.profile` have no extension.
    pub fn cut_ext(&mut self) -> &mut Self {
        self.text = match ext_dot(&self.text) {
            Some(dot) => self.text[dot + 1..].to_string(),
            None => String::new(),
        };
        self
    }

    /// Keeps only the drive (`"C:"`); empty when there is none or the style
    /// has no drive concept.
    pub fn cut_drive(&mut self) -> &mut Self {
        if self.style.drive_concept && has_drive(&self.text) {
            let end = self.text.char_indices().nth(2).map_or(self.text.len(), |(idx, _)| idx);
            self.text.truncate(end);
        } else {
            self.text.clear();
        }
        self
    }

    /// Removes a leading drive (`"C:"`) if present.
    pub fn erase_drive(&mut self) -> &mut Self {
        if self.style.drive_concept && has_drive(&self.text) {
            let end = self.text.char_indices().nth(2).map_or(self.text.len(), |(idx, _)| idx);
            self.text.drain(..end);
        }
        self
    }

    /// Replaces or appends the extension.
    ///
    /// `ext` may be given with or without its leading dot. An empty `ext`
    /// removes the extension together with its dot, so `"c.txt"` becomes
    /// `"c"` rather than `"c."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::path::XPath;
    ///
    /// let mut path = XPath::from("/data/report.txt");
    /// path.set_ext("md");
    /// assert_eq!(path.as_str(), "/data/report.md");
    /// path.set_ext(".tar.gz");
    /// assert_eq!(path.as_str(), "/data/report.tar.gz");
    /// ```
    pub fn set_ext(&mut self, ext: &str) -> &mut Self {
        if let Some(dot) = ext_dot(&self.text) {
            self.text.truncate(dot);
        }
        if !ext.is_empty() {
            if !ext.starts_with('.') {
                self.text.push('.');
            }
            self.text.push_str(ext);
        }
        self
    }

    /// Replaces the base name, keeping drive, directory and extension.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        let parts = self.split_path();
        let rooted = self.text.starts_with(is_slash);
        self.make_path(&parts.drive, &parts.dir, name, &parts.ext);
        if !self.style.drive_concept {
            // make_path drops the root without a drive concept
            let body = erase_sym_left(&self.text, SEPARATORS).to_string();
            self.text = if rooted {
                format!("{CANONICAL_SEPARATOR}{body}")
            } else {
                body
            };
        }
        self
    }

    /// Replaces the file name together with its extension.
    pub fn set_name_ex(&mut self, name_ex: &str) -> &mut Self {
        self.cut_path();
        self.text.push_str(name_ex);
        self
    }

    /// Replaces the directory, keeping name and extension.
    pub fn set_path(&mut self, dir: &str) -> &mut Self {
        let parts = self.split_path();
        let mut rebuilt = self.derive(dir);
        rebuilt.check_slash();
        rebuilt.text.push_str(&parts.name);
        if !parts.ext.is_empty() {
            rebuilt.text.push('.');
            rebuilt.text.push_str(&parts.ext);
        }
        *self = rebuilt;
        self
    }

    /// Replaces the drive, keeping directory, name and extension.
    pub fn set_drive(&mut self, drive: &str) -> &mut Self {
        let parts = self.split_path();
        self.make_path(drive, &parts.dir, &parts.name, &parts.ext);
        self
    }

    /// Splits the path into drive, directory, name and extension.
    ///
    /// The directory comes out without drive and without leading or
    /// trailing separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use xhelpers::path::{PathStyle, XPath};
    ///
    /// let path = XPath::with_style("C:/work/src/main.rs", PathStyle::windows());
    /// let parts = path.split_path();
    /// assert_eq!(parts.drive, "C:");
    /// assert_eq!(parts.dir, "work/src");
    /// assert_eq!(parts.name, "main");
    /// assert_eq!(parts.ext, "rs");
    /// ```
    #[must_use]
    pub fn split_path(&self) -> PathParts {
        let mut drive = self.clone();
        drive.cut_drive().strip_slash();

        let mut dir = self.clone();
        dir.cut_path().strip_slash().erase_drive();
        let dir_text = erase_sym_left(&dir.text, SEPARATORS).to_string();

        let mut name = self.clone();
        name.cut_name();

        let mut ext = self.clone();
        ext.cut_ext();

        PathParts {
            drive: drive.text,
            dir: dir_text,
            name: name.text,
            ext: ext.text,
        }
    }

    /// Rebuilds the path from its parts.
    ///
    /// With a drive concept the result is `D:/dir/name.ext` or
    /// `/dir/name.ext`; without one it is `dir/name.ext`. Trailing dots left
    /// by an empty extension are trimmed.
    pub fn make_path(&mut self, drive: &str, dir: &str, name: &str, ext: &str) -> &mut Self {
        let composed = if self.style.drive_concept {
            let drive = erase_sym_right(drive, ":\\/");
            if drive.is_empty() {
                format!("/{dir}/{name}.{ext}")
            } else {
                format!("{drive}:/{dir}/{name}.{ext}")
            }
        } else {
            format!("{dir}/{name}.{ext}")
        };
        self.text = erase_sym_right(&composed, ".").to_string();
        self
    }

    /// Rebuilds the path from a [`PathParts`] value.
    pub fn make_path_from(&mut self, parts: &PathParts) -> &mut Self {
        self.make_path(&parts.drive, &parts.dir, &parts.name, &parts.ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::style::PathStyle;

    fn cut(text: &str, op: fn(&mut XPath) -> &mut XPath) -> String {
        let mut path = XPath::with_style(text, PathStyle::posix());
        op(&mut path);
        path.into_string()
    }

    #[test]
    fn test_canonize_both_directions() {
        let mut path = XPath::from("a\\b/c");
        assert_eq!(path.canonize(false).as_str(), "a/b/c");
        assert_eq!(path.canonize(true).as_str(), "a\\b\\c");
        assert_eq!(path.canonize(true).as_str(), "a\\b\\c");
    }

    #[test]
    fn test_check_and_strip_slash() {
        assert_eq!(cut("a/b", XPath::check_slash), "a/b/");
        assert_eq!(cut("a/b\\", XPath::check_slash), "a/b\\");
        assert_eq!(cut("", XPath::check_slash), "");
        assert_eq!(cut("a/b//\\", XPath::strip_slash), "a/b");
        assert_eq!(cut("/", XPath::strip_slash), "");
    }

    #[test]
    fn test_cut_path() {
        assert_eq!(cut("/a/b/c.txt", XPath::cut_path), "/a/b/");
        assert_eq!(cut("a\\b\\c.txt", XPath::cut_path), "a\\b\\");
        assert_eq!(cut("c.txt", XPath::cut_path), "");
        assert_eq!(cut("", XPath::cut_path), "");
    }

    #[test]
    fn test_cut_name_variants() {
        assert_eq!(cut("/a/b/c.txt", XPath::cut_name), "c");
        assert_eq!(cut("/a/b/c.tar.gz", XPath::cut_name), "c.tar");
        assert_eq!(cut("/a/b/c.txt", XPath::cut_name_ex), "c.txt");
        assert_eq!(cut("c.txt", XPath::cut_name_ex), "c.txt");
        assert_eq!(cut("/a/b/", XPath::cut_name_ex), "");
        assert_eq!(cut("/a/b/.profile", XPath::cut_name), ".profile");
    }

    #[test]
    fn test_cut_ext() {
        assert_eq!(cut("/a/b/c.txt", XPath::cut_ext), "txt");
        assert_eq!(cut("/a/b/c", XPath::cut_ext), "");
        assert_eq!(cut("/a/b/.profile", XPath::cut_ext), "");
        assert_eq!(cut(".profile", XPath::cut_ext), "");
        assert_eq!(cut("/a.d/c", XPath::cut_ext), "");
    }

    #[test]
    fn test_cut_drive_depends_on_style() {
        let mut windows = XPath::with_style("C:/x/y", PathStyle::windows());
        assert_eq!(windows.cut_drive().as_str(), "C:");

        let mut posix = XPath::with_style("C:/x/y", PathStyle::posix());
        assert_eq!(posix.cut_drive().as_str(), "");

        let mut no_drive = XPath::with_style("/x/y", PathStyle::windows());
        assert_eq!(no_drive.cut_drive().as_str(), "");
    }

    #[test]
    fn test_erase_drive() {
        let mut path = XPath::with_style("D:/data", PathStyle::windows());
        assert_eq!(path.erase_drive().as_str(), "/data");
        let mut path = XPath::with_style("/data", PathStyle::windows());
        assert_eq!(path.erase_drive().as_str(), "/data");
    }

    #[test]
    fn test_set_ext() {
        let mut path = XPath::from("/a/b/c");
        assert_eq!(path.set_ext("txt").as_str(), "/a/b/c.txt");
        assert_eq!(path.set_ext(".md").as_str(), "/a/b/c.md");

        let mut dotfile = XPath::from("/home/.bashrc");
        assert_eq!(dotfile.set_ext("bak").as_str(), "/home/.bashrc.bak");

        let mut dotted_dir = XPath::from("/a.d/file");
        assert_eq!(dotted_dir.set_ext("x").as_str(), "/a.d/file.x");
    }

    #[test]
    fn test_set_ext_empty_removes_extension_and_dot() {
        let mut path = XPath::from("/a/b/c.txt");
        assert_eq!(path.set_ext("").as_str(), "/a/b/c");
        assert!(!path.as_str().ends_with('.'));
        assert_eq!(path.clone().cut_ext().as_str(), "");

        let mut bare = XPath::from("/a/b/c");
        assert_eq!(bare.set_ext("").as_str(), "/a/b/c");
    }

    #[test]
    fn test_set_name_windows_style() {
        let mut path = XPath::with_style("C:/dir/old.txt", PathStyle::windows());
        assert_eq!(path.set_name("new").as_str(), "C:/dir/new.txt");
    }

    #[test]
    fn test_set_name_posix_keeps_root() {
        let mut path = XPath::with_style("/dir/sub/old.txt", PathStyle::posix());
        assert_eq!(path.set_name("new").as_str(), "/dir/sub/new.txt");

        let mut relative = XPath::with_style("dir/old", PathStyle::posix());
        assert_eq!(relative.set_name("new").as_str(), "dir/new");

        let mut bare = XPath::with_style("old.txt", PathStyle::posix());
        assert_eq!(bare.set_name("new").as_str(), "new.txt");
    }

    #[test]
    fn test_set_name_ex_and_set_path() {
        let mut path = XPath::from("/a/b/c.txt");
        assert_eq!(path.set_name_ex("d.md").as_str(), "/a/b/d.md");
        assert_eq!(path.set_path("/x/y").as_str(), "/x/y/d.md");
        assert_eq!(path.set_path("rel/").as_str(), "rel/d.md");
    }

    #[test]
    fn test_set_drive() {
        let mut path = XPath::with_style("C:/dir/file.txt", PathStyle::windows());
        assert_eq!(path.set_drive("E:").as_str(), "E:/dir/file.txt");
    }

    #[test]
    fn test_split_path_posix() {
        let parts = XPath::with_style("/a/b/c.txt", PathStyle::posix()).split_path();
        assert_eq!(
            parts,
            PathParts {
                drive: String::new(),
                dir: "a/b".into(),
                name: "c".into(),
                ext: "txt".into(),
            }
        );
    }

    #[test]
    fn test_make_path_per_style() {
        let mut windows = XPath::with_style("", PathStyle::windows());
        assert_eq!(windows.make_path("C:", "d", "n", "e").as_str(), "C:/d/n.e");
        assert_eq!(windows.make_path("", "d", "n", "e").as_str(), "/d/n.e");
        assert_eq!(windows.make_path("C", "d", "n", "").as_str(), "C:/d/n");

        let mut posix = XPath::with_style("", PathStyle::posix());
        assert_eq!(posix.make_path("C:", "d", "n", "e").as_str(), "d/n.e");
    }

    #[test]
    fn test_long_paths_are_not_truncated() {
        let long_dir = "segment/".repeat(200);
        let text = format!("/{long_dir}file.txt");
        let mut path = XPath::from(text.as_str());
        path.cut_path();
        assert_eq!(path.len(), text.len() - "file.txt".len());
        let mut name = XPath::from(text.as_str());
        assert_eq!(name.cut_name().as_str(), "file");
    }
}
