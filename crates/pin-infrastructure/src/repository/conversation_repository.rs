//! Conversation repository over a key-value store.

use std::sync::Arc;

use pin_core::error::Result;
use pin_core::storage::{KeyValueStore, keys};
use pin_core::workspace::{ConversationRepository, WorkspaceState};

use super::blob::{read_json, write_json};

/// Stores the whole workspace state under `pin_state_v1`.
#[derive(Clone)]
pub struct StoreConversationRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreConversationRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl ConversationRepository for StoreConversationRepository {
    fn load_state(&self) -> Result<WorkspaceState> {
        Ok(read_json(self.store.as_ref(), keys::WORKSPACE_STATE)?.unwrap_or_default())
    }

    fn save_state(&self, state: &WorkspaceState) -> Result<()> {
        write_json(self.store.as_ref(), keys::WORKSPACE_STATE, state)
    }
}
