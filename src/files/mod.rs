//! Filesystem primitives behind the [`PathOps`] capability trait.
//!
//! The command layer depends only on the trait; [`local::LocalFs`] is the
//! host-filesystem implementation. Platform differences stay inside the
//! implementation so callers never branch on the OS.

pub mod local;
pub mod utils;

use serde::Serialize;

use crate::errors::FsError;

/// Metadata for a single filesystem entry.
///
/// Exactly one of `is_directory`/`is_file` is true: anything that is not a
/// directory counts as a file, including special files.
#[derive(Debug, Clone, Copy)]
pub struct FileStats {
    pub size: u64,
    pub is_directory: bool,
    pub is_file: bool,
}

/// Options consumed by a single write: the target path plus the full buffer.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Kind tag for a directory listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    Directory,
    File,
    /// Special files, dangling symlinks, and anything else that is neither
    /// a directory nor a regular file.
    Other,
}

/// One entry of a directory listing, serialized as `{"entry", "type"}`.
#[derive(Debug, Clone, Serialize)]
pub struct DirEntry {
    pub entry: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Capability trait over the host filesystem.
///
/// One method per native action. Each call opens, uses, and closes its own
/// handles; no state is carried between calls.
pub trait PathOps {
    /// Create a single directory. Intermediate parents are not created.
    fn create_dir(&self, path: &str) -> Result<(), FsError>;

    /// Remove a single empty directory.
    fn remove_dir(&self, path: &str) -> Result<(), FsError>;

    /// Remove a single file (not recursive).
    fn remove_file(&self, path: &str) -> Result<(), FsError>;

    /// Read the entire file into memory.
    fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError>;

    /// Write the full buffer, creating or truncating the target.
    fn write_file(&self, options: &WriteOptions) -> Result<(), FsError>;

    /// Query size and entry type. Follows symlinks.
    fn stats(&self, path: &str) -> Result<FileStats, FsError>;

    /// List directory entries in native enumeration order.
    fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, FsError>;

    /// Copy a file. An existing destination is overwritten.
    fn copy(&self, source: &str, destination: &str) -> Result<(), FsError>;

    /// Rename via the native primitive only; cross-filesystem moves fail
    /// here and are the caller's concern.
    fn rename(&self, source: &str, destination: &str) -> Result<(), FsError>;
}
