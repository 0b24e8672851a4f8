//! Wildcard directory listing and per-file metadata.

use std::fs::{self, Metadata};

use glob::{glob_with, MatchOptions, Pattern};

use crate::path::XPath;
use crate::timestamp::Timestamp;

/// Matches `name` against a glob pattern: `*` is any run of characters,
/// `?` exactly one and `[...]` a character class. Matching is
/// case-sensitive and a malformed pattern matches nothing.
///
/// # Examples
///
/// ```
/// use xhelpers::fs::wildcard_match;
///
/// assert!(wildcard_match("*.log", "server.log"));
/// assert!(wildcard_match("data-??.csv", "data-07.csv"));
/// assert!(!wildcard_match("*.log", "server.log.gz"));
/// ```
#[must_use]
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern).is_ok_and(|p| p.matches_with(name, MatchOptions::new()))
}

/// Metadata snapshot of one filesystem entry.
///
/// Queries never fail: a missing or unreadable entry reports `false` for
/// every flag, null timestamps and size zero.
#[derive(Debug, Clone)]
pub struct FileInfo {
    path: String,
    metadata: Option<Metadata>,
}

impl FileInfo {
    /// Reads metadata for `path` without following a trailing separator.
    #[must_use]
    pub fn query(path: &str) -> Self {
        let metadata = if path.is_empty() {
            None
        } else {
            fs::metadata(path)
                .map_err(|e| log::debug!("no metadata for {path:?}: {e}"))
                .ok()
        };
        Self {
            path: path.to_string(),
            metadata,
        }
    }

    /// The path this entry was queried with.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The final segment of the path.
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .rsplit(crate::path::is_slash)
            .next()
            .unwrap_or(&self.path)
    }

    /// Whether the entry exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.metadata.is_some()
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub fn is_subdir(&self) -> bool {
        self.metadata.as_ref().is_some_and(Metadata::is_dir)
    }

    /// Whether the entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.metadata.as_ref().is_some_and(Metadata::is_file)
    }

    /// Whether the entry is a regular file that cannot be written.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.metadata
            .as_ref()
            .is_some_and(|m| m.is_file() && m.permissions().readonly())
    }

    /// Whether the entry is a regular file accessible to its owner.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                m.is_file() && m.permissions().mode() & 0o600 != 0
            }
            #[cfg(not(unix))]
            {
                m.is_file()
            }
        })
    }

    /// Whether the entry is hidden.
    ///
    /// On Windows this is the hidden attribute; elsewhere a name starting
    /// with `.`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        if !self.exists() {
            return false;
        }
        #[cfg(windows)]
        {
            self.attribute(0x2)
        }
        #[cfg(not(windows))]
        {
            self.name().starts_with('.')
        }
    }

    /// Whether the archive attribute is set. Always `false` off Windows.
    #[must_use]
    pub fn is_archive(&self) -> bool {
        #[cfg(windows)]
        {
            self.attribute(0x20)
        }
        #[cfg(not(windows))]
        {
            false
        }
    }

    /// Whether the system attribute is set. Always `false` off Windows.
    #[must_use]
    pub fn is_system(&self) -> bool {
        #[cfg(windows)]
        {
            self.attribute(0x4)
        }
        #[cfg(not(windows))]
        {
            false
        }
    }

    #[cfg(windows)]
    fn attribute(&self, mask: u32) -> bool {
        use std::os::windows::fs::MetadataExt;
        self.metadata
            .as_ref()
            .is_some_and(|m| m.file_attributes() & mask != 0)
    }

    /// Creation time, null when the platform does not record it.
    #[must_use]
    pub fn creation_time(&self) -> Timestamp {
        self.time(Metadata::created)
    }

    /// Last access time.
    #[must_use]
    pub fn access_time(&self) -> Timestamp {
        self.time(Metadata::accessed)
    }

    /// Last modification time.
    #[must_use]
    pub fn write_time(&self) -> Timestamp {
        self.time(Metadata::modified)
    }

    fn time(
        &self,
        read: fn(&Metadata) -> std::io::Result<std::time::SystemTime>,
    ) -> Timestamp {
        self.metadata
            .as_ref()
            .and_then(|m| read(m).ok())
            .map_or(Timestamp::NULL, Timestamp::from_system_time)
    }

    /// Size in bytes, zero for missing entries.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.metadata.as_ref().map_or(0, Metadata::len)
    }
}

/// Iterator over the entries matching a glob mask.
///
/// The mask is a directory part followed by a pattern in the last segment
/// (`"logs/*.txt"`, `"C:/data/report-??.csv"`). Entries are listed once at
/// construction and yielded sorted by name. As with shell globbing,
/// wildcards do not match a leading `.` unless the pattern itself starts
/// with one.
///
/// # Examples
///
/// ```no_run
/// use xhelpers::fs::FileFinder;
///
/// for info in FileFinder::new("/var/log/*.log") {
///     println!("{} {}", info.path(), info.size());
/// }
/// ```
#[derive(Debug)]
pub struct FileFinder {
    mask: String,
    entries: std::vec::IntoIter<FileInfo>,
}

impl FileFinder {
    /// Lists the entries matching `mask`.
    ///
    /// Wildcards are honoured in the last segment only; the directory part
    /// is taken literally. An unreadable directory or malformed pattern
    /// yields nothing.
    #[must_use]
    pub fn new(mask: &str) -> Self {
        let mut dir = XPath::from(mask);
        dir.cut_path();
        let mut name = XPath::from(mask);
        name.cut_name_ex();
        let name = if name.is_empty() { "*" } else { name.as_str() };

        // A pattern that already starts with a dot matches dot-files alone,
        // so the leading-dot rule only has to apply to the others.
        let options = MatchOptions {
            require_literal_leading_dot: !name.starts_with('.'),
            ..MatchOptions::new()
        };
        let pattern = format!("{}{name}", Pattern::escape(dir.as_str()));

        let mut entries: Vec<FileInfo> = match glob_with(&pattern, options) {
            Ok(paths) => paths
                .filter_map(|entry| {
                    entry
                        .map_err(|e| log::debug!("skipping unreadable entry: {e}"))
                        .ok()
                })
                .map(|path| FileInfo::query(&super::canonize_path(&path.to_string_lossy())))
                .filter(|info| !matches!(info.name(), "." | ".."))
                .collect(),
            Err(e) => {
                log::debug!("invalid file mask {mask:?}: {e}");
                Vec::new()
            }
        };
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        Self {
            mask: mask.to_string(),
            entries: entries.into_iter(),
        }
    }

    /// The mask this finder was created with.
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }
}

impl Iterator for FileFinder {
    type Item = FileInfo;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
