//! Common test utilities for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use xhelpers::XPath;

/// A temporary directory exposed as an `XPath` with a trailing separator.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// The sandbox root as a path with a trailing `/`.
    pub fn root(&self) -> XPath {
        let mut root = XPath::from(self.dir.path());
        root.canonize(false).check_slash();
        root
    }

    /// The sandbox root as a standard path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `relative` inside the sandbox.
    pub fn join(&self, relative: &str) -> XPath {
        self.root().concatenated(&XPath::from(relative))
    }

    /// Writes `contents` to `relative`, creating parent folders.
    #[allow(dead_code)]
    pub fn write(&self, relative: &str, contents: &str) -> XPath {
        let target = self.join(relative);
        let mut parent = target.clone();
        parent.cut_path();
        assert!(parent.ensure_folder());
        fs::write(target.to_std_path(), contents).unwrap();
        target
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = std::env::var(key).ok();
        std::env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => std::env::set_var(&self.key, value),
            None => std::env::remove_var(&self.key),
        }
    }
}
