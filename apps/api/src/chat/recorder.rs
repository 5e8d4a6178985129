use tracing::warn;

use crate::models::chat::NewChatLog;
use crate::repository::PortfolioRepository;

/// Appends one completed turn to the chat log. Failures are logged and dropped.
pub async fn record_turn(repo: &dyn PortfolioRepository, entry: NewChatLog) {
    let session_id = entry.session_id.clone();
    if let Err(e) = repo.append_chat_log(entry).await {
        warn!(session_id = %session_id, "Failed to record chat turn: {e}");
    }
}
