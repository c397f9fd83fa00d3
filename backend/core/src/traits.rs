use anyhow::Result;
use async_trait::async_trait;

use crate::types::{ChatId, Turn};

/// Outbound messaging capability consumed by the dispatcher.
///
/// Implemented by the Telegram client; tests substitute capturing mocks.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a text message to a chat.
    async fn notify(&self, chat: ChatId, text: &str) -> Result<()>;

    /// Send a transient "composing" indicator to a chat.
    async fn notify_typing(&self, chat: ChatId) -> Result<()>;
}

/// Trait for completion providers used by the invoker.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "groq", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the response.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}

/// Request to a completion provider.
///
/// `messages` is the full ordered list: system instruction, history
/// snapshot, then the new user turn.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Turn>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Response from a completion provider.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}
