// AI chat over the résumé: prompt text, orchestration, audit logging and the
// HTTP handler.

pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod recorder;
