//! Thin wrappers over `std::fs` that report failure as `false`.
//!
//! Every operation comes in two forms: a `try_*` function returning
//! [`Result`](crate::Result) and a boolean wrapper that logs the error with
//! `log::warn!` and returns `false`. Path arguments are plain text in
//! either separator flavour.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::style::is_slash;

/// Replaces every `\` with `/`.
#[must_use]
pub fn canonize_path(path: &str) -> String {
    path.replace('\\', "/")
}

fn with_trailing_slash(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

fn has_drive(path: &str) -> bool {
    let mut chars = path.chars();
    matches!((chars.next(), chars.next()), (Some(letter), Some(':')) if letter.is_ascii_alphabetic())
}

/// Whether `path` is relative on the host platform.
///
/// An empty path is relative. A path starting with a separator is
/// absolute everywhere; on Windows a drive prefix also makes it absolute.
#[must_use]
pub fn is_path_relative(path: &str) -> bool {
    if path.starts_with(is_slash) {
        return false;
    }
    !(cfg!(windows) && has_drive(path))
}

fn join(base: &str, rest: &str) -> String {
    if !is_path_relative(rest) {
        return canonize_path(rest);
    }
    let mut joined = canonize_path(base);
    if !joined.is_empty() && !joined.ends_with('/') && !rest.starts_with(is_slash) {
        joined.push('/');
    }
    joined.push_str(&canonize_path(rest));
    joined
}

/// Resolves `path` against the directory containing the executable.
///
/// Absolute paths are only canonized. `..` segments are kept as written.
#[must_use]
pub fn absolute_path(path: &str) -> String {
    if is_path_relative(path) {
        join(&module_dir_path(), path)
    } else {
        canonize_path(path)
    }
}

/// Directory containing the running executable, canonized, with a
/// trailing `/`.
///
/// Falls back to the current directory when the executable path cannot be
/// determined.
#[must_use]
pub fn module_dir_path() -> String {
    match env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => with_trailing_slash(canonize_path(&dir.to_string_lossy())),
            None => current_directory(),
        },
        Err(e) => {
            log::warn!("cannot locate executable: {e}");
            current_directory()
        }
    }
}

/// Current working directory, canonized, with a trailing `/`.
///
/// Empty when the working directory is unavailable.
#[must_use]
pub fn current_directory() -> String {
    match env::current_dir() {
        Ok(dir) => with_trailing_slash(canonize_path(&dir.to_string_lossy())),
        Err(e) => {
            log::warn!("cannot read current directory: {e}");
            String::new()
        }
    }
}

/// System temporary directory, canonized, with a trailing `/`.
#[must_use]
pub fn temp_directory() -> String {
    with_trailing_slash(canonize_path(&env::temp_dir().to_string_lossy()))
}

/// Whether `path` names an existing regular file.
#[must_use]
pub fn is_file_exist(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_file()
}

/// Whether `path` names an existing directory.
#[must_use]
pub fn is_dir_exist(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}

fn require_non_empty(path: &str) -> Result<&Path> {
    if path.is_empty() {
        return Err(Error::InvalidPath {
            path: Path::new(path).to_path_buf(),
            reason: "empty path".to_string(),
        });
    }
    Ok(Path::new(path))
}

/// Creates `path` and any missing parents.
///
/// # Errors
///
/// Fails for an empty path or when the directory cannot be created.
pub fn try_ensure_folder(path: &str) -> Result<()> {
    let target = require_non_empty(path)?;
    if target.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(target).map_err(|e| Error::from_io(e, target))
}

/// Boolean form of [`try_ensure_folder`].
pub fn ensure_folder(path: &str) -> bool {
    report("ensure folder", path, try_ensure_folder(path))
}

/// Removes a file, or a directory with all its contents.
///
/// # Errors
///
/// Fails for an empty or missing path, or when removal fails.
pub fn try_remove(path: &str) -> Result<()> {
    let target = require_non_empty(path)?;
    let result = if target.is_dir() {
        fs::remove_dir_all(target)
    } else if target.exists() {
        fs::remove_file(target)
    } else {
        return Err(Error::PathNotFound {
            path: target.to_path_buf(),
        });
    };
    result.map_err(|e| Error::from_io(e, target))
}

/// Boolean form of [`try_remove`].
pub fn remove(path: &str) -> bool {
    report("remove", path, try_remove(path))
}

/// Renames or moves `from` to `to`.
///
/// # Errors
///
/// Fails for empty paths or when the rename fails.
pub fn try_rename(from: &str, to: &str) -> Result<()> {
    let source = require_non_empty(from)?;
    let target = require_non_empty(to)?;
    fs::rename(source, target).map_err(|e| Error::from_io(e, source))
}

/// Boolean form of [`try_rename`].
pub fn rename(from: &str, to: &str) -> bool {
    report("rename", from, try_rename(from, to))
}

/// Copies the regular file `from` to `to`, overwriting `to`.
///
/// # Errors
///
/// Fails for empty paths, when `from` is a directory, or when the copy
/// fails.
pub fn try_copy(from: &str, to: &str) -> Result<()> {
    let source = require_non_empty(from)?;
    let target = require_non_empty(to)?;
    if source.is_dir() {
        return Err(Error::InvalidPath {
            path: source.to_path_buf(),
            reason: "directories cannot be copied".to_string(),
        });
    }
    fs::copy(source, target)
        .map(|_| ())
        .map_err(|e| Error::from_io(e, source))
}

/// Boolean form of [`try_copy`].
pub fn copy(from: &str, to: &str) -> bool {
    report("copy", from, try_copy(from, to))
}

fn report(operation: &str, path: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{operation} {path:?} failed: {e}");
            false
        }
    }
}
