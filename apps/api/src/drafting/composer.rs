//! Prompt composition: a validated `ReplyRequest` in, instruction + content blocks out.
//!
//! Deterministic and transport-agnostic: the composer knows nothing about the
//! completion service beyond the plain text it hands over.

use crate::drafting::prompts::{
    DEFAULT_MAX_TOKENS, DEFAULT_OBJECTIVE, FINAL_DIRECTIVE, FORMALITY_LABEL, LENGTH_LABEL,
    LONG_FORM_MAX_TOKENS, OBJECTIVE_HEADING, REPLY_SYSTEM, TEMPERATURE, THREAD_HEADING, TONE_LABEL,
};
use crate::drafting::request::ReplyRequest;
use crate::drafting::style::{formality_guide, length_guide, StyleLevel};
use crate::llm_client::CompletionRequest;

/// The two prompt blocks for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    /// System-level guidance.
    pub instruction: String,
    /// User-level content: thread, objective, style guidance, directive.
    pub content: String,
    pub objective: String,
}

/// The override instruction when present, otherwise the default objective.
pub fn primary_objective(request: &ReplyRequest) -> String {
    request
        .extra_instruction
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_OBJECTIVE)
        .to_string()
}

pub fn compose(request: &ReplyRequest) -> ComposedPrompt {
    let objective = primary_objective(request);

    // Built with format! rather than placeholder replacement so text inside the
    // thread can never be mistaken for a template slot.
    let content = format!(
        "{THREAD_HEADING}\n\"\"\"\n{thread}\n\"\"\"\n\n\
         {OBJECTIVE_HEADING}\n{objective}\n\n\
         {LENGTH_LABEL} {length}\n\
         {FORMALITY_LABEL} {formality}\n\
         {TONE_LABEL} {tone}\n\n\
         {FINAL_DIRECTIVE}",
        thread = request.email_text.trim_end(),
        length = length_guide(request.length),
        formality = formality_guide(request.formality),
        tone = request.tone,
    );

    ComposedPrompt {
        instruction: REPLY_SYSTEM.to_string(),
        content,
        objective,
    }
}

/// Long-form replies get a larger output budget.
pub fn max_output_tokens(length: StyleLevel) -> u32 {
    if length.is_max() {
        LONG_FORM_MAX_TOKENS
    } else {
        DEFAULT_MAX_TOKENS
    }
}

impl ComposedPrompt {
    pub fn into_completion(self, length: StyleLevel) -> CompletionRequest {
        CompletionRequest {
            system: self.instruction,
            user: self.content,
            max_tokens: max_output_tokens(length),
            temperature: TEMPERATURE,
        }
    }
}
