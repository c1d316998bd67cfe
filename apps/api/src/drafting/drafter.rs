//! Reply drafting. Orchestrates one `/generate` request.
//!
//! Flow: compose prompt → completion call (bounded by a timeout) → empty check →
//!       sanitize → return reply text.
//!
//! The completion call is the only suspension point. There are no retries.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::drafting::composer::compose;
use crate::drafting::prompts::PROMPT_VERSION;
use crate::drafting::request::ReplyRequest;
use crate::drafting::sanitizer::sanitize_reply;
use crate::errors::AppError;
use crate::llm_client::Completer;

/// Runs the drafting pipeline for an already validated request.
pub async fn draft_reply(
    completer: &dyn Completer,
    request: &ReplyRequest,
    timeout: Duration,
) -> Result<String, AppError> {
    let prompt = compose(request);
    debug!(
        "Composed prompt {PROMPT_VERSION}: objective_chars={}, content_chars={}",
        prompt.objective.chars().count(),
        prompt.content.chars().count()
    );

    let completion = prompt.into_completion(request.length);
    debug!(
        "Completion budget: max_tokens={}, temperature={}",
        completion.max_tokens, completion.temperature
    );

    let raw = match tokio::time::timeout(timeout, completer.complete(&completion)).await {
        Ok(result) => result?,
        Err(_) => {
            return Err(AppError::Timeout {
                secs: timeout.as_secs(),
            })
        }
    };

    if raw.trim().is_empty() {
        return Err(AppError::EmptyGeneration);
    }

    let reply = sanitize_reply(&raw);
    if reply.is_empty() {
        warn!("Generated text contained nothing but subject lines");
        return Err(AppError::EmptyGeneration);
    }

    info!(
        "Reply drafted: {} chars ({} raw)",
        reply.chars().count(),
        raw.chars().count()
    );
    Ok(reply)
}
