use std::sync::Arc;

use crate::config::Config;
use crate::gemini::GenerativeBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative backend behind a trait object so tests can substitute a mock.
    pub backend: Arc<dyn GenerativeBackend>,
    pub config: Config,
}
