//! Per-conversation style selection store.
//!
//! An explicitly owned, injectable store rather than process-global state:
//! construct one at startup and hand clones to whoever needs it. Entries live
//! until cleared or the process exits — no eviction, no persistence.
//!
//! Teloxide may run handlers for different chats concurrently, so the map is
//! behind a mutex. The lock is only held for single map operations; never
//! across an await point.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Opaque key identifying a single chat session (Telegram chat id).
pub type ConversationId = i64;

/// Shared handle to the selection map. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    inner: Arc<Mutex<HashMap<ConversationId, String>>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally set the style for a conversation, overwriting any
    /// previous selection.
    pub fn set(&self, conversation: ConversationId, style_key: impl Into<String>) {
        let mut map = self.inner.lock().expect("selection store poisoned");
        map.insert(conversation, style_key.into());
    }

    /// Current style key for a conversation, if one was selected.
    pub fn get(&self, conversation: ConversationId) -> Option<String> {
        let map = self.inner.lock().expect("selection store poisoned");
        map.get(&conversation).cloned()
    }

    /// Remove the selection for a conversation. Removing an absent key is a
    /// no-op, not an error.
    pub fn clear(&self, conversation: ConversationId) {
        let mut map = self.inner.lock().expect("selection store poisoned");
        map.remove(&conversation);
    }
}
