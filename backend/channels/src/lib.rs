//! `relayforge-channels` — Telegram transport.
//!
//! Inbound webhook payload types and the outbound Bot API client that
//! implements the core [`Notifier`](relayforge_core::Notifier) capability.

pub mod telegram;
pub mod update;

pub use telegram::TelegramClient;
pub use update::{Chat, IncomingMessage, Update};
