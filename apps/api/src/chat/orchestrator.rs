//! Chat Orchestrator: grounds the upstream model in the résumé on the first
//! turn, replays caller-supplied history, and never fails once a credential
//! exists. Stateless between calls.

use std::time::Duration;

use tracing::{info, warn};

use crate::chat::prompts::{
    build_system_message, with_brevity_reminder, AI_UNAVAILABLE_KEY, HARDCODED_FALLBACK,
    MODEL_ACK, SYSTEM_INSTRUCTION,
};
use crate::chat::recorder::record_turn;
use crate::llm_client::{ChatModel, LlmError};
use crate::models::chat::{NewChatLog, Role, Turn};
use crate::repository::PortfolioRepository;
use crate::resume::context::build_resume_context;

/// Setting holding the AI credential. Takes precedence over the environment.
pub const API_KEY_SETTING: &str = "gemini_api_key";

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub history: Vec<Turn>,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    /// Sequence the caller replays next time, context pair included.
    pub history: Vec<Turn>,
    /// `reply` is the localized unavailable message.
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Reply(ChatReply),
    /// No credential is configured; the model was not called.
    Unavailable,
}

pub struct ChatOrchestrator<'a> {
    pub repo: &'a dyn PortfolioRepository,
    pub model: &'a dyn ChatModel,
    /// `GEMINI_API_KEY` from the environment, if set.
    pub env_api_key: Option<&'a str>,
    pub timeout: Duration,
    /// Locale of the second fallback lookup.
    pub default_locale: &'a str,
}

impl ChatOrchestrator<'_> {
    pub async fn chat(&self, request: ChatRequest) -> ChatOutcome {
        let Some(api_key) = resolve_api_key(self.repo, self.env_api_key).await else {
            info!("Chat unavailable: no AI credential configured");
            return ChatOutcome::Unavailable;
        };

        let context = if has_context_pair(&request.history) {
            None
        } else {
            self.load_context(&request.locale).await
        };
        let mut turns = build_turns(context.as_deref(), request.history, &request.message);

        let result = match tokio::time::timeout(
            self.timeout,
            self.model.generate(&api_key, &turns),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.timeout)),
        };

        let (reply, fell_back) = match result {
            Ok(text) => (text, false),
            Err(e) => {
                warn!(session_id = %request.session_id, "AI call failed, using fallback: {e}");
                let text = resolve_fallback(self.repo, &request.locale, self.default_locale).await;
                (text, true)
            }
        };

        record_turn(
            self.repo,
            NewChatLog {
                session_id: request.session_id.clone(),
                user_message: request.message.clone(),
                ai_response: reply.clone(),
                locale: request.locale.clone(),
            },
        )
        .await;

        // The failed exchange is not replayed; the reminder suffix never is.
        if fell_back {
            turns.pop();
        } else {
            if let Some(last) = turns.last_mut() {
                last.text = request.message;
            }
            turns.push(Turn::model(reply.clone()));
        }

        ChatOutcome::Reply(ChatReply {
            reply,
            history: turns,
            fell_back,
        })
    }

    async fn load_context(&self, locale: &str) -> Option<String> {
        match build_resume_context(self.repo, locale).await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                warn!("Resume context for '{locale}' is empty, chatting without it");
                None
            }
            Err(e) => {
                warn!("Could not build resume context for '{locale}': {e}");
                None
            }
        }
    }
}

/// Non-empty `gemini_api_key` setting, else the non-empty environment key.
pub async fn resolve_api_key(
    repo: &dyn PortfolioRepository,
    env_api_key: Option<&str>,
) -> Option<String> {
    match repo.setting(API_KEY_SETTING).await {
        Ok(Some(key)) if !key.trim().is_empty() => return Some(key.trim().to_string()),
        Ok(_) => {}
        Err(e) => warn!("Could not read {API_KEY_SETTING} setting: {e}"),
    }
    env_api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

/// True when `history` already opens with the grounding message. Clients that
/// replay only the visible conversation get the pair injected again.
pub fn has_context_pair(history: &[Turn]) -> bool {
    matches!(
        history.first(),
        Some(turn) if turn.role == Role::User && turn.text.starts_with(SYSTEM_INSTRUCTION)
    )
}

/// Upstream turn sequence: optional context pair, replayed history, then the
/// new message with the brevity reminder.
pub fn build_turns(context: Option<&str>, history: Vec<Turn>, message: &str) -> Vec<Turn> {
    let mut turns = Vec::with_capacity(history.len() + 3);
    if let Some(context) = context {
        turns.push(Turn::user(build_system_message(context)));
        turns.push(Turn::model(MODEL_ACK));
    }
    turns.extend(history);
    turns.push(Turn::user(with_brevity_reminder(message)));
    turns
}

/// `aiUnavailable` in `locale`, then in `default_locale`, then a fixed English sentence.
pub async fn resolve_fallback(
    repo: &dyn PortfolioRepository,
    locale: &str,
    default_locale: &str,
) -> String {
    let mut candidates = vec![locale];
    if default_locale != locale {
        candidates.push(default_locale);
    }
    for candidate in candidates {
        match repo.translation(AI_UNAVAILABLE_KEY, candidate).await {
            Ok(Some(text)) if !text.trim().is_empty() => return text,
            Ok(_) => {}
            Err(e) => warn!("Could not load {AI_UNAVAILABLE_KEY} for '{candidate}': {e}"),
        }
    }
    HARDCODED_FALLBACK.to_string()
}
