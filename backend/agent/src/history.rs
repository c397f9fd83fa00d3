//! Per-chat bounded conversation history.

use std::collections::{HashMap, VecDeque};

use relayforge_core::{ChatId, Turn};
use tokio::sync::RwLock;

/// In-memory store of per-chat rolling history buffers.
///
/// Each chat gets a FIFO buffer of at most `capacity` turns, created
/// lazily on first append and kept for the process lifetime. Access from
/// different chats never interferes; overlapping requests for the same
/// chat are not serialized here (see DESIGN.md).
pub struct HistoryStore {
    capacity: usize,
    inner: RwLock<HashMap<ChatId, VecDeque<Turn>>>,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of the buffer for `chat`, oldest first. Empty if unseen.
    pub async fn get(&self, chat: ChatId) -> Vec<Turn> {
        let map = self.inner.read().await;
        map.get(&chat)
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Append a turn at the tail, evicting from the head while the
    /// buffer exceeds capacity.
    pub async fn append(&self, chat: ChatId, turn: Turn) {
        let mut map = self.inner.write().await;
        let buffer = map.entry(chat).or_default();
        buffer.push_back(turn);
        while buffer.len() > self.capacity {
            buffer.pop_front();
        }
    }

    /// Empty the buffer for `chat`. Subsequent `get`s return an empty
    /// snapshot, not an error.
    pub async fn clear(&self, chat: ChatId) {
        let mut map = self.inner.write().await;
        if let Some(buffer) = map.get_mut(&chat) {
            buffer.clear();
        }
    }
}
