//! Filesystem facade.
//!
//! Boolean-returning wrappers over `std::fs` for the handful of operations
//! path code needs (existence checks, folder creation, copy, rename,
//! removal), plus a directory lister built on the `glob` crate and a metadata
//! snapshot type.
//! Failures are logged through the `log` facade rather than returned; each
//! operation also has a `try_*` form that returns [`Result`](crate::Result).

mod facade;
mod finder;

pub use facade::{
    absolute_path, canonize_path, copy, current_directory, ensure_folder, is_dir_exist,
    is_file_exist, is_path_relative, module_dir_path, remove, rename, temp_directory, try_copy,
    try_ensure_folder, try_remove, try_rename,
};
pub use finder::{wildcard_match, FileFinder, FileInfo};
