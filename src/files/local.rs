//! Host-filesystem implementation of [`PathOps`].

use std::path::Path;

use crate::errors::{map_io_error, FsError};

use super::{DirEntry, EntryType, FileStats, PathOps, WriteOptions};

/// File backend over the host operating system's filesystem.
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for LocalFs {
    fn create_dir(&self, path: &str) -> Result<(), FsError> {
        std::fs::create_dir(path).map_err(|e| map_io_error(e, path))
    }

    fn remove_dir(&self, path: &str) -> Result<(), FsError> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(e, path))
    }

    fn remove_file(&self, path: &str) -> Result<(), FsError> {
        std::fs::remove_file(path).map_err(|e| map_io_error(e, path))
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError> {
        std::fs::read(path).map_err(|e| map_io_error(e, path))
    }

    fn write_file(&self, options: &WriteOptions) -> Result<(), FsError> {
        std::fs::write(&options.filename, &options.data)
            .map_err(|e| map_io_error(e, &options.filename))
    }

    fn stats(&self, path: &str) -> Result<FileStats, FsError> {
        let metadata = std::fs::metadata(path).map_err(|e| map_io_error(e, path))?;
        let is_directory = metadata.is_dir();
        Ok(FileStats {
            size: metadata.len(),
            is_directory,
            is_file: !is_directory,
        })
    }

    fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        let entries = std::fs::read_dir(Path::new(path)).map_err(|e| map_io_error(e, path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(e, path))?;
            let name = entry.file_name().to_string_lossy().to_string();

            // Classification follows symlinks, like the stat call; entries
            // whose target cannot be read stay `Other`.
            let entry_type = match std::fs::metadata(entry.path()) {
                Ok(md) if md.is_dir() => EntryType::Directory,
                Ok(md) if md.is_file() => EntryType::File,
                _ => EntryType::Other,
            };

            result.push(DirEntry {
                entry: name,
                entry_type,
            });
        }

        Ok(result)
    }

    fn copy(&self, source: &str, destination: &str) -> Result<(), FsError> {
        std::fs::copy(source, destination)
            .map(|_| ())
            .map_err(|e| map_io_error(e, source))
    }

    fn rename(&self, source: &str, destination: &str) -> Result<(), FsError> {
        std::fs::rename(source, destination).map_err(|e| map_io_error(e, source))
    }
}
