//! Host filesystem operations as JSON command handlers.
//!
//! The embedding desktop host parses each frontend request, hands the
//! resulting input record to one of the [`FileCommands`] methods, and
//! serializes the output record back. Every command returns either
//! `{"success": true, ...}` or `{"error": {"code", "message"}}`, never both.

pub mod commands;
pub mod errors;
pub mod files;
pub mod protocol;

pub use commands::FileCommands;
pub use errors::FsError;
pub use files::local::LocalFs;
pub use files::PathOps;
