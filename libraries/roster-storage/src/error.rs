/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
///
/// Both variants display the driver's message unchanged.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Connecting (after all retries) or closing the connection failed
    #[error(transparent)]
    Connection(sqlx::Error),

    /// Statement execution or row decoding failed
    #[error(transparent)]
    Query(sqlx::Error),
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(e) => roster_core::RosterError::connection(e.to_string()),
            StorageError::Query(e) => roster_core::RosterError::query(e.to_string()),
        }
    }
}
