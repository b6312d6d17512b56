//! Wire-facing protocol pieces: the error-code catalog, the output
//! envelope, and the typed per-command parameter records.

pub mod errors;
pub mod methods;
pub mod payload;
