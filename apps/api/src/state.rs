use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Completer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Production: `LlmClient`; tests swap in a fake.
    pub completer: Arc<dyn Completer>,
    pub config: Config,
}

impl AppState {
    pub fn new(completer: Arc<dyn Completer>, config: Config) -> Self {
        Self { completer, config }
    }
}
