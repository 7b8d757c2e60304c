//! Conversation repository trait.

use super::state::WorkspaceState;
use crate::error::Result;

/// Persistence for the whole workspace state blob.
///
/// A missing or malformed blob loads as [`WorkspaceState::default`].
pub trait ConversationRepository: Send + Sync {
    fn load_state(&self) -> Result<WorkspaceState>;

    fn save_state(&self, state: &WorkspaceState) -> Result<()>;
}
