use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use relayforge_core::{CompletionProvider, CompletionRequest, CompletionResponse};

/// A mock completion provider that returns canned responses or fails on
/// demand. Used by agent and gateway tests.
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
    fail_with: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Make every `complete` call fail with the given message.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Requests received so far, in order.
    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = &self.fail_with {
            anyhow::bail!("{}", message);
        }

        Ok(CompletionResponse {
            content: self
                .fixed_response
                .clone()
                .unwrap_or_else(|| "Mock response".to_string()),
            model: "mock".to_string(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}
