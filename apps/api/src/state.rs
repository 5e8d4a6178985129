use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;
use crate::repository::PortfolioRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres in production, in-memory in tests.
    pub repo: Arc<dyn PortfolioRepository>,
    /// Gemini in production, scripted in tests.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
}
