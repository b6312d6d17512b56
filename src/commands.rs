//! Filesystem commands: one method per operation the frontend can invoke.
//!
//! Each command takes the parsed input record, validates it into typed
//! params, performs the filesystem work through [`PathOps`], and returns
//! the output record. A malformed input record produces a structured
//! bad-request error rather than a fault.

use base64::Engine;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::FsError;
use crate::files::local::LocalFs;
use crate::files::{PathOps, WriteOptions};
use crate::protocol::errors as codes;
use crate::protocol::methods::{PathParams, StatsResult, TransferParams, WriteFileParams};
use crate::protocol::payload::{
    error_output, success_message, success_output, success_value, success_with,
};

/// The filesystem command surface.
///
/// Generic over the [`PathOps`] capability so the backend is picked where
/// the commands are constructed; [`FileCommands::local`] is the
/// host-filesystem default.
pub struct FileCommands<O: PathOps> {
    ops: O,
}

impl FileCommands<LocalFs> {
    /// Commands over the host filesystem.
    pub fn local() -> Self {
        Self::new(LocalFs::new())
    }
}

impl<O: PathOps> FileCommands<O> {
    pub fn new(ops: O) -> Self {
        Self { ops }
    }

    /// Create a single directory. Parents are not created.
    pub fn create_directory(&self, input: Value) -> Value {
        let params: PathParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("create_directory: {}", params.path);

        match self.ops.create_dir(&params.path) {
            Ok(()) => success_message(format!("Directory {} was created", params.path)),
            Err(e) => fail(codes::DIR_CREATE_FAILED, e.to_string()),
        }
    }

    /// Remove a single empty directory.
    pub fn remove_directory(&self, input: Value) -> Value {
        let params: PathParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("remove_directory: {}", params.path);

        match self.ops.remove_dir(&params.path) {
            Ok(()) => success_message(format!("Directory {} was removed", params.path)),
            Err(e) => fail(codes::DIR_REMOVE_FAILED, e.to_string()),
        }
    }

    /// Read a file as UTF-8 text.
    pub fn read_file(&self, input: Value) -> Value {
        let params: PathParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("read_file: {}", params.path);

        match self.read_text(&params.path) {
            Ok(text) => success_value(text),
            Err(e) => fail(codes::FILE_READ_FAILED, e.to_string()),
        }
    }

    /// Read a file and return its bytes base64-encoded.
    pub fn read_binary_file(&self, input: Value) -> Value {
        let params: PathParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("read_binary_file: {}", params.path);

        let b64 = base64::engine::general_purpose::STANDARD;
        match self.ops.read_file(&params.path) {
            Ok(bytes) => success_value(b64.encode(bytes)),
            Err(e) => fail(codes::FILE_READ_FAILED, e.to_string()),
        }
    }

    /// Write UTF-8 text to a file, creating or truncating it.
    pub fn write_file(&self, input: Value) -> Value {
        let params: WriteFileParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("write_file: {}", params.path);

        let options = WriteOptions {
            filename: params.path,
            data: params.data.into_bytes(),
        };
        match self.ops.write_file(&options) {
            Ok(()) => success_output(),
            Err(e) => fail(codes::FILE_WRITE_FAILED, e.to_string()),
        }
    }

    /// Decode base64 `data` and write the raw bytes to a file.
    ///
    /// Malformed base64 is rejected before any filesystem access.
    pub fn write_binary_file(&self, input: Value) -> Value {
        let params: WriteFileParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("write_binary_file: {}", params.path);

        let b64 = base64::engine::general_purpose::STANDARD;
        let data = match b64.decode(params.data.as_bytes()) {
            Ok(data) => data,
            Err(e) => {
                return fail(
                    codes::BAD_PARAMS,
                    format!("Invalid base64 data for {}: {}", params.path, e),
                )
            }
        };

        let options = WriteOptions {
            filename: params.path,
            data,
        };
        match self.ops.write_file(&options) {
            Ok(()) => success_output(),
            Err(e) => fail(codes::FILE_WRITE_FAILED, e.to_string()),
        }
    }

    /// Remove a single file.
    pub fn remove_file(&self, input: Value) -> Value {
        let params: PathParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("remove_file: {}", params.path);

        match self.ops.remove_file(&params.path) {
            Ok(()) => success_message(format!("{} was deleted", params.path)),
            Err(e) => fail(codes::FILE_REMOVE_FAILED, e.to_string()),
        }
    }

    /// List a directory in native enumeration order.
    ///
    /// The stats check runs first; when it fails no listing is attempted.
    pub fn read_directory(&self, input: Value) -> Value {
        let params: PathParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("read_directory: {}", params.path);

        let stats = match self.ops.stats(&params.path) {
            Ok(stats) => stats,
            Err(e) => return fail(codes::NO_SUCH_PATH, e.to_string()),
        };
        if !stats.is_directory {
            return fail(
                codes::NO_SUCH_PATH,
                format!("{} is not a directory", params.path),
            );
        }

        match self.ops.read_dir(&params.path) {
            Ok(entries) => success_value(entries),
            Err(e) => fail(codes::NO_SUCH_PATH, e.to_string()),
        }
    }

    /// Copy a file; an existing destination is overwritten.
    pub fn copy_file(&self, input: Value) -> Value {
        let params: TransferParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("copy_file: {} -> {}", params.source, params.destination);

        match self.ops.copy(&params.source, &params.destination) {
            Ok(()) => success_message("File copy operation was successful"),
            Err(e) => fail(
                codes::FILE_COPY_FAILED,
                format!(
                    "Cannot copy {} to {}: {}",
                    params.source, params.destination, e
                ),
            ),
        }
    }

    /// Move a file: native rename first, copy-then-delete fallback for
    /// destinations the rename primitive cannot reach.
    pub fn move_file(&self, input: Value) -> Value {
        let params: TransferParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("move_file: {} -> {}", params.source, params.destination);

        match self.move_path(&params.source, &params.destination) {
            Ok(()) => success_message("File move operation was successful"),
            Err(e) => fail(
                codes::FILE_MOVE_FAILED,
                format!(
                    "Cannot move {} to {}: {}",
                    params.source, params.destination, e
                ),
            ),
        }
    }

    /// Size and entry type for a path.
    pub fn get_stats(&self, input: Value) -> Value {
        let params: PathParams = match parse_params(input) {
            Ok(p) => p,
            Err(output) => return output,
        };
        debug!("get_stats: {}", params.path);

        match self.ops.stats(&params.path) {
            Ok(stats) => success_with(StatsResult {
                size: stats.size,
                is_file: stats.is_file,
                is_directory: stats.is_directory,
            }),
            Err(e) => fail(codes::NO_SUCH_PATH, e.to_string()),
        }
    }

    fn read_text(&self, path: &str) -> Result<String, FsError> {
        let bytes = self.ops.read_file(path)?;
        String::from_utf8(bytes)
            .map_err(|_| FsError::OperationFailed(format!("{path} is not valid UTF-8 text")))
    }

    fn move_path(&self, source: &str, destination: &str) -> Result<(), FsError> {
        match self.ops.rename(source, destination) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                // Rename cannot cross filesystems; retry as copy + delete.
                debug!("rename failed ({rename_err}), falling back to copy");
                self.ops.copy(source, destination)?;
                self.ops.remove_file(source)
            }
        }
    }
}

/// Deserialize the input record into typed params, or build the
/// bad-request error arm.
fn parse_params<T: DeserializeOwned>(input: Value) -> Result<T, Value> {
    serde_json::from_value(input).map_err(|e| fail(codes::BAD_PARAMS, format!("Invalid params: {e}")))
}

/// Log and build the error arm.
fn fail(code: &str, message: impl Into<String>) -> Value {
    let message = message.into();
    warn!("{code}: {message}");
    error_output(code, message)
}
