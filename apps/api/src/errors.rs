use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("The uploaded file is empty.")]
    EmptyContent,

    #[error("An error occurred: {0}")]
    RemoteService(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            AppError::Extract(ExtractError::Parse(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "PARSE_ERROR")
            }
            AppError::Extract(ExtractError::Decode(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DECODE_ERROR")
            }
            AppError::EmptyContent => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_CONTENT"),
            AppError::RemoteService(_) => (StatusCode::BAD_GATEWAY, "REMOTE_SERVICE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match &self {
            AppError::RemoteService(e) => tracing::error!("Critique service error: {e}"),
            AppError::Extract(e) => tracing::warn!("Extraction error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            other => tracing::info!("Rejected request: {other}"),
        }

        // The message is shown to the user verbatim, underlying cause included.
        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
