//! Dispatcher: the orchestrator behind the webhook.
//!
//! Classifies each authenticated text event, routes commands to the
//! interpreter and free text through the completion path, and owns all
//! read/write sequencing of the per-chat stores. Never errors for a
//! well-formed event: generation failures degrade to a fixed fallback
//! reply and notify failures are logged, not propagated.

use std::sync::Arc;

use relayforge_core::{ChatId, Notifier, Turn};
use tracing::{debug, error, info, warn};

use crate::commands::Command;
use crate::history::HistoryStore;
use crate::invoker::CompletionInvoker;
use crate::mode;
use crate::prefs::PreferenceStore;
use crate::{commands, GENERATION_FALLBACK};

pub struct Dispatcher {
    history: HistoryStore,
    prefs: PreferenceStore,
    invoker: CompletionInvoker,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(
        history_capacity: usize,
        invoker: CompletionInvoker,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            history: HistoryStore::new(history_capacity),
            prefs: PreferenceStore::new(),
            invoker,
            notifier,
        }
    }

    /// Handle one authenticated text event end to end.
    ///
    /// Exactly one reply is sent per event; the caller acknowledges the
    /// transport independently of whether that send succeeded.
    pub async fn dispatch(&self, chat: ChatId, text: &str) {
        let text = text.trim();

        if let Some(command) = Command::parse(text) {
            debug!(chat = %chat, ?command, "Handling command");
            let reply = commands::execute(command, chat, &self.history, &self.prefs).await;
            self.send(chat, &reply).await;
            return;
        }

        self.answer_query(chat, text).await;
    }

    async fn answer_query(&self, chat: ChatId, text: &str) {
        // Best-effort composing indicator; failures are ignored.
        if let Err(e) = self.notifier.notify_typing(chat).await {
            debug!(chat = %chat, error = %e, "Typing indicator failed");
        }

        let snapshot = self.history.get(chat).await;
        let mode = self.prefs.get(chat).await;
        let params = mode::resolve(mode);

        info!(
            chat = %chat,
            mode = %mode,
            history_len = snapshot.len(),
            "Answering query"
        );

        let answer = match self.invoker.invoke(&snapshot, text, params).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(chat = %chat, error = %e, "Generation failed, using fallback reply");
                GENERATION_FALLBACK.to_string()
            }
        };

        // User turn first, then assistant. The fallback text is recorded
        // too (see DESIGN.md).
        self.history.append(chat, Turn::user(text)).await;
        self.history.append(chat, Turn::assistant(&answer)).await;

        self.send(chat, &answer).await;
    }

    async fn send(&self, chat: ChatId, text: &str) {
        if let Err(e) = self.notifier.notify(chat, text).await {
            error!(chat = %chat, error = %e, "Failed to send reply");
        }
    }
}
