//! Completion Invoker
//!
//! Wraps the completion capability with failure isolation: one call, no
//! retry, typed failure. The dispatcher maps the failure to the fixed
//! fallback reply, keeping the "swallow everything" behavior an explicit
//! mapping instead of a silent catch-all.

use std::sync::Arc;

use relayforge_core::{
    CompletionProvider, CompletionRequest, GenParams, RelayError, Turn,
};
use tracing::debug;

/// Fixed system instruction; pins the reply language to the relay's
/// target audience.
pub const SYSTEM_PROMPT: &str =
    "Respond helpfully and objectively, in Brazilian Portuguese.";

/// Substituted when the provider succeeds but returns no content. Not a
/// failure.
pub const EMPTY_CONTENT_REPLY: &str = "I could not generate a response.";

pub struct CompletionInvoker {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl CompletionInvoker {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Invoke the provider once with system + history + new user turn.
    ///
    /// Any provider error (timeout, transport, malformed response) comes
    /// back as [`RelayError::GenerationFailed`]; nothing is retried.
    pub async fn invoke(
        &self,
        history: &[Turn],
        user_text: &str,
        params: GenParams,
    ) -> Result<String, RelayError> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Turn::system(SYSTEM_PROMPT));
        messages.extend_from_slice(history);
        messages.push(Turn::user(user_text));

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        match self.provider.complete(&request).await {
            Ok(response) => {
                debug!(
                    provider = self.provider.name(),
                    tokens = response.tokens_used,
                    latency_ms = response.latency_ms,
                    "Completion succeeded"
                );
                if response.content.trim().is_empty() {
                    Ok(EMPTY_CONTENT_REPLY.to_string())
                } else {
                    Ok(response.content)
                }
            }
            Err(e) => Err(RelayError::GenerationFailed {
                provider: self.provider.name().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayforge_core::Role;
    use relayforge_llm::MockProvider;

    fn params() -> GenParams {
        GenParams { temperature: 0.5, max_tokens: 384 }
    }

    #[tokio::test]
    async fn builds_system_history_user_message_list() {
        let provider = Arc::new(MockProvider::new("mock").with_response("ok"));
        let invoker = CompletionInvoker::new(provider.clone(), "test-model");

        let history = vec![Turn::user("earlier"), Turn::assistant("reply")];
        invoker.invoke(&history, "now", params()).await.unwrap();

        let requests = provider.recorded_requests();
        assert_eq!(requests.len(), 1);
        let messages = &requests[0].messages;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].content, "earlier");
        assert_eq!(messages[2].content, "reply");
        assert_eq!(messages[3].role, Role::User);
        assert_eq!(messages[3].content, "now");
        assert_eq!(requests[0].model, "test-model");
    }

    #[tokio::test]
    async fn provider_failure_becomes_generation_failed() {
        let provider = Arc::new(MockProvider::new("mock").with_error("boom"));
        let invoker = CompletionInvoker::new(provider.clone(), "test-model");

        let err = invoker.invoke(&[], "hi", params()).await.unwrap_err();
        assert!(matches!(err, RelayError::GenerationFailed { .. }));
        // One try, no retry.
        assert_eq!(provider.recorded_requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_content_substitutes_fixed_reply() {
        let provider = Arc::new(MockProvider::new("mock").with_response("  "));
        let invoker = CompletionInvoker::new(provider, "test-model");

        let answer = invoker.invoke(&[], "hi", params()).await.unwrap();
        assert_eq!(answer, EMPTY_CONTENT_REPLY);
    }
}
