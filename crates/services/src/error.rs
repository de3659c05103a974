//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `RosterService`.
///
/// A fetch failure at any nesting level (students, books, sessions) aborts
/// the whole roster load; no partial data is surfaced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RosterError {
    #[error("reading data is unavailable")]
    DataUnavailable(#[source] StorageError),
}

impl From<StorageError> for RosterError {
    fn from(e: StorageError) -> Self {
        Self::DataUnavailable(e)
    }
}
