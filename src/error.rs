use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("User already exists")]
    Conflict,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("You are not logged in, please provide token")]
    Unauthorized,
    #[error("Invalid token")]
    Forbidden,
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation => AppError::Conflict,
            // The token names a user that no longer exists.
            StoreError::ForeignKeyViolation => AppError::Forbidden,
            StoreError::Database(e) => {
                tracing::error!(error = %e, "database error");
                AppError::Internal("Database error".to_owned())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = if status.is_server_error() { "error" } else { "fail" };
        let error_response = json!({
            "status": kind,
            "message": self.to_string(),
        });
        (status, Json(error_response)).into_response()
    }
}
