use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use logging::redact_bot_token;
use relayforge_core::{ChatId, Notifier};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

/// Outbound timeout for `sendMessage`.
const SEND_TIMEOUT: Duration = Duration::from_secs(20);

/// Outbound timeout for the transient typing indicator. Best-effort
/// traffic, so it gets a much shorter budget.
const TYPING_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the Telegram Bot API.
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: "https://api.telegram.org".to_string(),
            token: token.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url.trim_end_matches('/'),
            self.token,
            method
        )
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, chat: ChatId, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .timeout(SEND_TIMEOUT)
            .json(&json!({ "chat_id": chat.0, "text": text }))
            .send()
            .await
            .map_err(|e| {
                anyhow::anyhow!("sendMessage request failed: {}", redact_bot_token(&e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("sendMessage returned {}: {}", status, body);
        }

        debug!(chat = %chat, "Sent message");
        Ok(())
    }

    async fn notify_typing(&self, chat: ChatId) -> Result<()> {
        let result = self
            .client
            .post(self.method_url("sendChatAction"))
            .timeout(TYPING_TIMEOUT)
            .json(&json!({ "chat_id": chat.0, "action": "typing" }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                warn!(chat = %chat, status = %response.status(), "sendChatAction rejected");
                anyhow::bail!("sendChatAction returned {}", response.status());
            }
            Err(e) => {
                let message = redact_bot_token(&e.to_string());
                warn!(chat = %chat, error = %message, "sendChatAction failed");
                anyhow::bail!("sendChatAction failed: {}", message);
            }
        }
    }
}
