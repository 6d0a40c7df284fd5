//! Error types for routine-grid.
//!
//! Most operations in this crate degrade instead of failing (unparseable
//! times become midnight, unknown lab shapes become empty). Only the payload
//! boundary and the routine acceptance gate can return an [`Error`].

use thiserror::Error;

use crate::validation::DayCoverage;

/// Result type for routine-grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// The routine payload is not valid JSON.
    #[error("Invalid routine payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The routine meets on days the user did not select.
    ///
    /// The whole routine is rejected; no partial grid is produced.
    #[error("{}", .0.message())]
    DayMismatch(DayCoverage),
}
