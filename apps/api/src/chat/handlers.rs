use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::chat::orchestrator::{ChatOrchestrator, ChatOutcome, ChatRequest};
use crate::errors::AppError;
use crate::locales::load_site_locales;
use crate::models::chat::{Turn, MAX_SESSION_ID_CHARS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub message: Option<String>,
    #[serde(default, alias = "chat_history")]
    pub history: Option<Vec<Turn>>,
    #[serde(default, alias = "sessionId")]
    pub session_id: Option<String>,
    #[serde(default, alias = "language")]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub session_id: String,
    pub history: Vec<Turn>,
}

/// POST /api/ai/chat
///
/// 400 without a message, 503 when no AI credential is configured. Upstream
/// failures still answer 200 with the localized fallback reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    // Ids that would not fit the log column are replaced, not truncated.
    let session_id = body
        .session_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s.chars().count() <= MAX_SESSION_ID_CHARS)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let repo = state.repo.as_ref();
    let site_locales = load_site_locales(repo, &state.config.default_locale).await;
    let locale = site_locales.resolve(body.locale.as_deref()).to_string();

    let orchestrator = ChatOrchestrator {
        repo,
        model: state.llm.as_ref(),
        env_api_key: state.config.gemini_api_key.as_deref(),
        timeout: state.config.chat_timeout,
        default_locale: &state.config.canonical_locale,
    };

    let outcome = orchestrator
        .chat(ChatRequest {
            session_id: session_id.clone(),
            message,
            history: body.history.unwrap_or_default(),
            locale,
        })
        .await;

    match outcome {
        ChatOutcome::Reply(reply) => {
            if reply.fell_back {
                debug!(session_id = %session_id, "Chat answered with fallback text");
            }
            Ok(Json(ChatResponse {
                reply: reply.reply,
                session_id,
                history: reply.history,
            }))
        }
        ChatOutcome::Unavailable => Err(AppError::ServiceUnavailable(
            "AI assistant is not configured".to_string(),
        )),
    }
}
