/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// Every variant displays its message verbatim, so driver errors reach
/// callers with their original text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Caller supplied input that fails validation
    #[error("{0}")]
    InvalidInput(String),

    /// The database could not be reached, or a connection failed to close
    #[error("{0}")]
    Connection(String),

    /// A statement failed to execute or its rows failed to decode
    #[error("{0}")]
    Query(String),
}

impl RosterError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a query error
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Whether the error was caused by the caller rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
