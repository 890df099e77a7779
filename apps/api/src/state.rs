use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::store::{CandidateStore, HrStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub candidates: Arc<dyn CandidateStore>,
    pub hr: Arc<dyn HrStore>,
    /// Upstream generation service. `LlmClient` in production, a scripted fake in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
