use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CritiqueService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every critique runs against its own upload.
#[derive(Clone)]
pub struct AppState {
    /// Remote critique model. `GeminiClient` in production, a fake in tests.
    pub critic: Arc<dyn CritiqueService>,
    pub config: Config,
}
