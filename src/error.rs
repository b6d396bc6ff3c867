use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;

use crate::domain::staff::ValidationFailure;
use crate::responses::ApiResponse;

// Staff Service Error
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {}", .0.errors.join("; "))]
    Validation(ValidationFailure),

    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Spreadsheet Error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF Error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl From<ValidationFailure> for ServiceError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            Self::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Validation(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed".to_string(),
            ),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while accessing the database.".into(),
            ),
            Self::Spreadsheet(_) | Self::Pdf(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while rendering the export document.".into(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, %status, "Server error");
        } else {
            tracing::warn!(error = %self, %status, "Client error");
        }

        match self {
            // A rejected submission carries the submitted values back so the
            // form can be re-presented as it was filled in.
            Self::Validation(failure) => {
                let body = ApiResponse {
                    success: false,
                    data: Some(failure),
                    error: Some(message),
                };
                (status, axum::Json(body)).into_response()
            }
            _ => {
                let body = ApiResponse::<()>::err(message);
                (status, axum::Json(body)).into_response()
            }
        }
    }
}
