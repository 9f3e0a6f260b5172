use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rgb_core::InputError;
use serde_json::json;

/// Errors returned by the form API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Form not found: {0}")]
    FormNotFound(String),

    #[error("Invalid parameter: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid form values: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Mutex lock error")]
    LockError,
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ApiError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ApiError::LockError
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FormNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationError { .. }
            | ApiError::InvalidInput(_)
            | ApiError::SerializationError(_) => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) | ApiError::LockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            ApiError::DatabaseError(_) => {
                tracing::error!("Database error: {}", self);
                "Internal database error".to_string()
            }
            ApiError::LockError => {
                tracing::error!("Lock error: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;
