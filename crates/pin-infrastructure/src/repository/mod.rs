//! Typed repositories over a [`KeyValueStore`].
//!
//! Each repository owns a handful of storage keys and applies the shared
//! recovery rule: a missing or malformed blob reads as absent.

mod admin_config_repository;
mod blob;
mod conversation_repository;
mod session_repository;

use std::sync::Arc;

use pin_core::admin::AdminConfigRepository;
use pin_core::session::SessionRepository;
use pin_core::storage::KeyValueStore;
use pin_core::workspace::ConversationRepository;

pub use admin_config_repository::StoreAdminConfigRepository;
pub use conversation_repository::StoreConversationRepository;
pub use session_repository::StoreSessionRepository;

/// The three repositories wired to one store, ready to inject into
/// controllers.
#[derive(Clone)]
pub struct Repositories {
    pub sessions: Arc<dyn SessionRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub admin: Arc<dyn AdminConfigRepository>,
}

impl Repositories {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            sessions: Arc::new(StoreSessionRepository::new(store.clone())),
            conversations: Arc::new(StoreConversationRepository::new(store.clone())),
            admin: Arc::new(StoreAdminConfigRepository::new(store)),
        }
    }
}
