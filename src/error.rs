use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// The only message a client ever sees when a submission cannot be saved.
pub const SAVE_FAILED: &str = "error al guardar";

#[derive(Debug)]
pub enum AppError {
    /// The store connection was never established or has gone away.
    StoreUnavailable(String),
    /// A body field could not be cast to its stored type.
    InvalidField(String),
    Internal(String),
    Database(mongodb::error::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::StoreUnavailable(msg) => write!(f, "Store Unavailable: {msg}"),
            AppError::InvalidField(msg) => write!(f, "Invalid Field: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::StoreUnavailable(msg) => tracing::error!("Store unavailable: {msg}"),
            AppError::InvalidField(msg) => tracing::error!("Invalid field: {msg}"),
            AppError::Internal(msg) => tracing::error!("Internal error: {msg}"),
            AppError::Database(err) => tracing::error!("Database error: {err}"),
        }

        let body = json!({ "error": SAVE_FAILED });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err)
    }
}
