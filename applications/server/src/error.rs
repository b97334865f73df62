/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors surfaced by handlers
///
/// Every variant renders as `{"error": <message>}`. Backend messages are
/// passed through unchanged.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] RosterError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Store(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::Store(_) | ServerError::Config(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ServerError::Store(RosterError::Connection(msg)) => {
                tracing::error!("Database connection error: {}", msg);
            }
            ServerError::Store(RosterError::Query(msg)) => {
                tracing::error!("Database query error: {}", msg);
            }
            ServerError::Config(msg) => tracing::error!("Config error: {}", msg),
            ServerError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            _ => tracing::debug!("Rejected request: {}", self),
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
