//! Store error kinds.

use thiserror::Error;

/// Errors surfaced by the record store and its backends.
///
/// Tolerated decode degradation (a malformed cell) is not an error; it is
/// logged and the affected field falls back to its default.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id on update/delete. Recoverable; maps to
    /// a user-visible "not found" outcome.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Backend read/write failed. The operation is aborted and the
    /// collection is left in its last successfully written state.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
