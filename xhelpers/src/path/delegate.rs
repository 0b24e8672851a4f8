//! Filesystem queries and actions on an [`XPath`], delegated to
//! [`crate::fs`].

use crate::fs::{self, FileInfo};
use crate::path::style::PathStyle;
use crate::path::types::XPath;
use crate::timestamp::Timestamp;

impl XPath {
    /// The current working directory, with a trailing `/`.
    #[must_use]
    pub fn current_directory() -> Self {
        Self::new(fs::current_directory())
    }

    /// The system temporary directory, with a trailing `/`.
    #[must_use]
    pub fn temp_path() -> Self {
        Self::new(fs::temp_directory())
    }

    /// The directory containing the running executable, with a trailing `/`.
    #[must_use]
    pub fn module_dir_path() -> Self {
        Self::with_style(fs::module_dir_path(), PathStyle::host())
    }

    /// Makes the path absolute against the executable's directory and
    /// canonizes its separators.
    pub fn full_path_name(&mut self) -> &mut Self {
        self.text = fs::absolute_path(&self.text);
        self.canonize(false)
    }

    /// Whether the path names an existing file or directory.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::is_file_exist(&self.text) || fs::is_dir_exist(&self.text)
    }

    /// Creates the directory and any missing parents.
    pub fn ensure_folder(&self) -> bool {
        fs::ensure_folder(&self.text)
    }

    /// Copies the file to `target`.
    pub fn copy_to(&self, target: &XPath) -> bool {
        fs::copy(&self.text, &target.text)
    }

    /// Moves the file or directory to `target`.
    pub fn move_to(&self, target: &XPath) -> bool {
        fs::rename(&self.text, &target.text)
    }

    /// Removes the file or directory tree. A path that does not exist
    /// counts as removed.
    pub fn remove(&self) -> bool {
        if !self.exists() {
            return true;
        }
        fs::remove(&self.text)
    }

    fn info(&self) -> FileInfo {
        let mut bare = self.clone();
        bare.strip_slash();
        FileInfo::query(&bare.text)
    }

    /// Whether the archive attribute is set.
    #[must_use]
    pub fn is_archive(&self) -> bool {
        self.info().is_archive()
    }

    /// Whether the entry is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.info().is_hidden()
    }

    /// Whether the entry is an ordinary accessible file.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        self.info().is_normal()
    }

    /// Whether the entry is a read-only file.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.info().is_read_only()
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub fn is_subdir(&self) -> bool {
        self.info().is_subdir()
    }

    /// Whether the system attribute is set.
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.info().is_system()
    }

    /// Creation time, null if unknown.
    #[must_use]
    pub fn file_creation_time(&self) -> Timestamp {
        self.info().creation_time()
    }

    /// Last access time, null if unknown.
    #[must_use]
    pub fn file_access_time(&self) -> Timestamp {
        self.info().access_time()
    }

    /// Last write time, null if unknown.
    #[must_use]
    pub fn file_write_time(&self) -> Timestamp {
        self.info().write_time()
    }

    /// Size in bytes, zero if unknown.
    #[must_use]
    pub fn file_size(&self) -> u64 {
        self.info().size()
    }
}
