// All LLM prompt constants for reply drafting.
// There is exactly one live template; bump PROMPT_VERSION whenever its wording changes.

/// Identifies the template below in logs.
pub const PROMPT_VERSION: &str = "v3";

/// Objective used when the caller gives no override instruction.
pub const DEFAULT_OBJECTIVE: &str = "Reply naturally to the latest message in the thread, \
    addressing any questions or requests it contains.";

/// System prompt for reply drafting.
pub const REPLY_SYSTEM: &str = "You are an assistant that drafts email replies on behalf of the user.

RULES:
- Output ONLY the body of the reply email.
- NEVER include a subject line. NEVER write the word \"Subject:\".
- Do NOT summarize the email thread.
- Do NOT explain your reasoning or add notes about the reply.
- The PRIMARY OBJECTIVE must be clearly and explicitly fulfilled in the reply.
- If the PRIMARY OBJECTIVE conflicts with the requested tone, realism, or conversational flow, \
the PRIMARY OBJECTIVE wins.";

pub const THREAD_HEADING: &str = "EMAIL THREAD:";
pub const OBJECTIVE_HEADING: &str = "PRIMARY OBJECTIVE:";
pub const LENGTH_LABEL: &str = "LENGTH:";
pub const FORMALITY_LABEL: &str = "FORMALITY:";
pub const TONE_LABEL: &str = "TONE:";
pub const FINAL_DIRECTIVE: &str = "Write the reply now.";

/// Output budget for every length level below the maximum.
pub const DEFAULT_MAX_TOKENS: u32 = 200;
/// Output budget for the longest level, which needs room for long-form replies.
pub const LONG_FORM_MAX_TOKENS: u32 = 450;
/// Moderate sampling: coherent, but not identical drafts on every call.
pub const TEMPERATURE: f32 = 0.7;
