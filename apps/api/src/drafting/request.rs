//! Request validation. Turns a raw `/generate` JSON payload into a `ReplyRequest`.

use serde::Deserialize;
use serde_json::Value;

use crate::drafting::style::StyleLevel;
use crate::errors::AppError;

pub const MISSING_EMAIL_TEXT: &str = "No email text provided.";
pub const DEFAULT_TONE: &str = "neutral";

/// Wire shape of the request body. Every field is kept as a raw `Value` so that
/// wrong types surface as our own validation errors rather than extractor rejections.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReplyRequest {
    email_text: Option<Value>,
    length: Option<Value>,
    formality: Option<Value>,
    tone: Option<Value>,
    extra_instruction: Option<Value>,
}

/// A validated reply request with all defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyRequest {
    pub email_text: String,
    pub length: StyleLevel,
    pub formality: StyleLevel,
    pub tone: String,
    /// Trimmed; `None` when absent or blank.
    pub extra_instruction: Option<String>,
}

impl ReplyRequest {
    /// Validates a JSON payload. Pure; never touches the network.
    pub fn from_payload(payload: &Value) -> Result<Self, AppError> {
        // A non-object body can't carry emailText. Checked up front because
        // serde would otherwise fill the struct positionally from an array.
        if !payload.is_object() {
            return Err(AppError::Validation(MISSING_EMAIL_TEXT.to_string()));
        }
        let raw: RawReplyRequest = serde_json::from_value(payload.clone())
            .map_err(|_| AppError::Validation(MISSING_EMAIL_TEXT.to_string()))?;

        let email_text = match raw.email_text {
            Some(Value::String(text)) if !text.trim().is_empty() => text,
            _ => return Err(AppError::Validation(MISSING_EMAIL_TEXT.to_string())),
        };

        let tone = optional_string(raw.tone, "tone")?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TONE.to_string());

        let extra_instruction = optional_string(raw.extra_instruction, "extraInstruction")?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(ReplyRequest {
            email_text,
            length: parse_level(raw.length, "length")?,
            formality: parse_level(raw.formality, "formality")?,
            tone,
            extra_instruction,
        })
    }
}

/// Numbers and numeric strings are rounded and clamped into 1–5; null or absent
/// falls back to the default level.
fn parse_level(value: Option<Value>, field: &str) -> Result<StyleLevel, AppError> {
    let invalid = || AppError::Validation(format!("{field} must be a number between 1 and 5."));

    let number = match value {
        None | Some(Value::Null) => return Ok(StyleLevel::DEFAULT),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(invalid)?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };

    if !number.is_finite() {
        return Err(invalid());
    }
    Ok(StyleLevel::clamped(number))
}

fn optional_string(value: Option<Value>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(AppError::Validation(format!("{field} must be a string."))),
    }
}
