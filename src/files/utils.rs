//! Path helpers shared by the host side: separator normalization and
//! cwd-relative resolution.

use std::path::Path;

use crate::errors::{map_io_error, FsError};

/// Replace backslashes with forward slashes so the frontend sees one
/// separator style regardless of platform.
pub fn normalize_path_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Parent-directory component of `path`, with separators normalized.
///
/// Returns `"."` for bare filenames and the path itself for filesystem
/// roots.
pub fn dirname(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            normalize_path_separators(&parent.to_string_lossy())
        }
        Some(_) => ".".to_string(),
        None => normalize_path_separators(path),
    }
}

/// The process working directory.
pub fn current_dir() -> Result<String, FsError> {
    std::env::current_dir()
        .map(|p| normalize_path_separators(&p.to_string_lossy()))
        .map_err(|e| map_io_error(e, "."))
}

/// Resolve `path` against the working directory without touching the
/// filesystem; the path does not need to exist.
pub fn absolute(path: &str) -> Result<String, FsError> {
    std::path::absolute(path)
        .map(|p| normalize_path_separators(&p.to_string_lossy()))
        .map_err(|e| map_io_error(e, path))
}
