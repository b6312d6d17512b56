//! Stable error codes for the filesystem command catalog.
//!
//! One code per failure scenario; every error payload pairs one of these
//! with a message naming the offending path(s).

/// Could not create the directory.
pub const DIR_CREATE_FAILED: &str = "NE_FS_DIRCRER";

/// Could not remove the directory.
pub const DIR_REMOVE_FAILED: &str = "NE_FS_RMDIRER";

/// Could not open or read the file.
pub const FILE_READ_FAILED: &str = "NE_FS_FILRDER";

/// Could not write the file.
pub const FILE_WRITE_FAILED: &str = "NE_FS_FILWRER";

/// Could not remove the file.
pub const FILE_REMOVE_FAILED: &str = "NE_FS_FILRMER";

/// The path does not exist or cannot be accessed.
pub const NO_SUCH_PATH: &str = "NE_FS_NOPATHE";

/// Could not copy the file to its destination.
pub const FILE_COPY_FAILED: &str = "NE_FS_COPYFER";

/// Could not move the file to its destination.
pub const FILE_MOVE_FAILED: &str = "NE_FS_MOVEFER";

/// The input record is missing a required field, a field has the wrong
/// type, or an encoded field failed to decode.
pub const BAD_PARAMS: &str = "NE_FS_BADPRMS";
