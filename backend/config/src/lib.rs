//! `relayforge-config` — RelayForge runtime configuration.
//!
//! All configuration comes from environment variables. The two secrets
//! (`TELEGRAM_TOKEN`, `GROQ_API_KEY`) are required and the process
//! refuses to start without them; everything else has a default.

use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::Deserialize;

/// Default Groq model served to every chat.
pub const DEFAULT_MODEL_ID: &str = "llama-3.1-8b-instant";

/// Default per-chat history capacity (5 user/assistant pairs).
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// RelayForge runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Telegram bot token; also embedded in the webhook path.
    pub telegram_token: String,
    /// Groq API key.
    pub groq_api_key: String,
    /// Optional shared secret checked against the
    /// `X-Telegram-Bot-Api-Secret-Token` header.
    pub webhook_secret: Option<String>,
    /// Model identifier requested from the completion provider.
    pub model_id: String,
    /// Per-chat history capacity in turns.
    pub history_capacity: usize,
    /// HTTP server bind address.
    pub bind_address: String,
    /// HTTP server port.
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Directory for rolling log files.
    pub log_dir: String,
}

impl RelayConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a provided variable map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();

        let Some(telegram_token) = get("TELEGRAM_TOKEN") else {
            bail!("TELEGRAM_TOKEN is not set");
        };
        let Some(groq_api_key) = get("GROQ_API_KEY") else {
            bail!("GROQ_API_KEY is not set");
        };

        let port = match get("RELAYFORGE_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("RELAYFORGE_PORT is not a valid port: {raw}"))?,
            None => 8080,
        };

        let history_capacity = match get("RELAYFORGE_HISTORY_CAPACITY") {
            Some(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("RELAYFORGE_HISTORY_CAPACITY is not a number: {raw}")
            })?,
            None => DEFAULT_HISTORY_CAPACITY,
        };

        Ok(Self {
            telegram_token,
            groq_api_key,
            webhook_secret: get("WEBHOOK_SECRET"),
            model_id: get("MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            history_capacity,
            bind_address: get("RELAYFORGE_BIND").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_level: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_dir: get("RELAYFORGE_LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }

    /// Summary safe for logging: secrets masked, everything else visible.
    pub fn redacted_summary(&self) -> String {
        format!(
            "model={} bind={}:{} history_capacity={} secret_header={}",
            self.model_id,
            self.bind_address,
            self.port,
            self.history_capacity,
            if self.webhook_secret.is_some() { "on" } else { "off" },
        )
    }
}
