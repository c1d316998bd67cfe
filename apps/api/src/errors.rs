use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Returned to clients whenever the completion call fails or times out.
pub const GENERATION_FAILED: &str = "AI generation failed.";
/// Returned when the completion call succeeds but yields no usable text.
pub const NO_REPLY_RETURNED: &str = "No reply returned.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as a JSON body of the form `{"error": .., "details"?: ..}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream completion error: {0}")]
    Upstream(String),

    #[error("Completion request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Completion returned no text")]
    EmptyGeneration,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout { secs } => AppError::Timeout { secs },
            LlmError::EmptyContent => AppError::EmptyGeneration,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Upstream(details) => {
                tracing::error!("Completion error: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": GENERATION_FAILED, "details": details }),
                )
            }
            AppError::Timeout { .. } => {
                tracing::error!("{self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": GENERATION_FAILED, "details": self.to_string() }),
                )
            }
            AppError::EmptyGeneration => {
                tracing::warn!("No reply returned from completion service");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": NO_REPLY_RETURNED }),
                )
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "Not found." })),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed." }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
