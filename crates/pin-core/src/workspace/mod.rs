//! Workspace domain module: chats, tickets and the persisted view selection.

mod repository;
mod state;
mod view;

pub use repository::ConversationRepository;
pub use state::{Counts, STATE_VERSION, WorkspaceState};
pub use view::View;
