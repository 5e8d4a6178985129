pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::errors::AppError;
use crate::resume::handlers::handle_get_resume;
use crate::site::handlers::{handle_get_settings, handle_get_translations};
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public site
        .route("/api/resume", get(handle_get_resume))
        .route("/api/settings", get(handle_get_settings))
        .route("/api/translations", get(handle_get_translations))
        // AI assistant
        .route("/api/ai/chat", post(handle_chat))
        .fallback(not_found)
        .with_state(state)
}
