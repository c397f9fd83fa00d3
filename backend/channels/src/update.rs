//! Inbound Telegram webhook payload types.
//!
//! Only the fields the relay actually consumes are modeled; Telegram
//! sends far more and serde drops the rest.

use relayforge_core::ChatId;
use serde::Deserialize;

/// One webhook update from the Telegram Bot API.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<IncomingMessage>,
    pub edited_message: Option<IncomingMessage>,
}

/// The message body of an update.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub chat: Chat,
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Extract the chat id and text of this update, if it carries any.
    ///
    /// Falls back from `message` to `edited_message`; updates without a
    /// text body (stickers, photos, member joins, ...) yield `None` and
    /// are acknowledged without further action.
    pub fn text_payload(&self) -> Option<(ChatId, &str)> {
        let message = self.message.as_ref().or(self.edited_message.as_ref())?;
        let text = message.text.as_deref()?;
        Some((ChatId(message.chat.id), text))
    }
}
