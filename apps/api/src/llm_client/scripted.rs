//! Scripted `ChatModel` for orchestrator and router tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::llm_client::{ChatModel, LlmError};
use crate::models::chat::Turn;

#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    /// Fails with an API error of this status.
    Fail(u16),
    /// Never answers within any sane timeout.
    Hang,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub api_key: String,
    pub turns: Vec<Turn>,
}

#[derive(Debug)]
pub struct ScriptedModel {
    script: Script,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self::new(Script::Reply(text.to_string()))
    }

    pub fn failing(status: u16) -> Self {
        Self::new(Script::Fail(status))
    }

    pub fn hanging() -> Self {
        Self::new(Script::Hang)
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn generate(&self, api_key: &str, turns: &[Turn]) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(Call {
            api_key: api_key.to_string(),
            turns: turns.to_vec(),
        });
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(LlmError::EmptyContent)
            }
        }
    }
}
