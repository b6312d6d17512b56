//! Typed parameter and result records for the filesystem commands.
//!
//! Params deserialize from the caller's input record; unknown extra fields
//! are ignored. Results serialize into the success arm of the envelope with
//! camelCase keys.

use serde::{Deserialize, Serialize};

/// Params for commands addressing a single path.
#[derive(Debug, Deserialize)]
pub struct PathParams {
    pub path: String,
}

/// Params for `write_file` and `write_binary_file`; `data` carries text or
/// base64 depending on the command.
#[derive(Debug, Deserialize)]
pub struct WriteFileParams {
    pub path: String,
    pub data: String,
}

/// Params for the two-path transfer commands (`copy_file`, `move_file`).
#[derive(Debug, Deserialize)]
pub struct TransferParams {
    pub source: String,
    pub destination: String,
}

/// Success payload of `get_stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub size: u64,
    pub is_file: bool,
    pub is_directory: bool,
}
