//! Axum route handlers for the Drafting API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::drafting::drafter::draft_reply;
use crate::drafting::request::{ReplyRequest, MISSING_EMAIL_TEXT};
use crate::errors::AppError;
use crate::state::AppState;

pub const INVALID_JSON: &str = "Request body must be valid JSON.";

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub reply: String,
}

/// POST /generate
///
/// Validates the thread and style preferences, drafts a reply through the
/// completion service and returns the sanitized text.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let Json(payload) = payload.map_err(|rejection| {
        warn!(%request_id, "Unreadable /generate body: {rejection}");
        match rejection {
            // No JSON content type means no fields at all.
            JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation(MISSING_EMAIL_TEXT.to_string())
            }
            _ => AppError::Validation(INVALID_JSON.to_string()),
        }
    })?;

    let request = ReplyRequest::from_payload(&payload).map_err(|err| {
        warn!(%request_id, "Rejected /generate request: {err}");
        err
    })?;

    info!(
        %request_id,
        email_chars = request.email_text.chars().count(),
        length = %request.length,
        formality = %request.formality,
        tone = %request.tone,
        has_instruction = request.extra_instruction.is_some(),
        "Drafting reply"
    );

    let reply = draft_reply(
        state.completer.as_ref(),
        &request,
        state.config.completion_timeout,
    )
    .await
    .map_err(|err| {
        warn!(%request_id, "Drafting failed: {err}");
        err
    })?;

    Ok(Json(GenerateResponse { reply }))
}
