// Reply drafting: request validation, style tables, prompt composition,
// output sanitizing and the pipeline that ties them to the completion service.
// All completion calls go through llm_client; nothing here talks HTTP directly.

pub mod composer;
pub mod drafter;
pub mod handlers;
pub mod prompts;
pub mod request;
pub mod sanitizer;
pub mod style;
