//! Per-chat response-mode preferences.

use std::collections::HashMap;

use relayforge_core::{ChatId, Mode};
use tokio::sync::RwLock;

/// In-memory store of per-chat modes.
///
/// Get-or-create semantics: the first read records the default (`short`)
/// so subsequent reads are stable. Invalid modes cannot reach `set`; the
/// command interpreter rejects unknown labels at parse time.
pub struct PreferenceStore {
    inner: RwLock<HashMap<ChatId, Mode>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Current mode for `chat`, recording the default on first access.
    pub async fn get(&self, chat: ChatId) -> Mode {
        let mut map = self.inner.write().await;
        *map.entry(chat).or_default()
    }

    pub async fn set(&self, chat: ChatId, mode: Mode) {
        let mut map = self.inner.write().await;
        map.insert(chat, mode);
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}
