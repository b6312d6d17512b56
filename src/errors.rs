//! Error types for the filesystem primitives.
//!
//! Raw `std::io::Error` values never leave the primitive layer: each one is
//! mapped here with the offending path attached, and the command layer turns
//! the result into a wire error payload.

use thiserror::Error;

/// Errors produced by the primitive layer.
#[derive(Error, Debug)]
pub enum FsError {
    /// The file or directory was not found.
    #[error("File not found: {0}")]
    NotFound(String),

    /// Permission was denied for the requested operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Any other failed filesystem operation; the message carries the path
    /// and the underlying OS error.
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Map `std::io::Error` to `FsError` based on error kind.
pub(crate) fn map_io_error(e: std::io::Error, path: &str) -> FsError {
    match e.kind() {
        std::io::ErrorKind::NotFound => FsError::NotFound(path.to_string()),
        std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_string()),
        _ => FsError::OperationFailed(format!("{}: {}", path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display() {
        let err = FsError::NotFound("/tmp/missing".into());
        assert_eq!(err.to_string(), "File not found: /tmp/missing");

        let err = FsError::PermissionDenied("/root/secret".into());
        assert_eq!(err.to_string(), "Permission denied: /root/secret");

        let err = FsError::OperationFailed("/tmp/x: disk full".into());
        assert_eq!(err.to_string(), "Operation failed: /tmp/x: disk full");
    }

    #[test]
    fn map_io_error_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = map_io_error(io_err, "/missing");
        assert!(matches!(err, FsError::NotFound(ref p) if p == "/missing"));
    }

    #[test]
    fn map_io_error_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = map_io_error(io_err, "/locked");
        assert!(matches!(err, FsError::PermissionDenied(ref p) if p == "/locked"));
    }

    #[test]
    fn map_io_error_other_keeps_path_and_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "exists");
        let err = map_io_error(io_err, "/taken");
        let msg = err.to_string();
        assert!(msg.contains("/taken"));
        assert!(msg.contains("exists"));
    }
}
