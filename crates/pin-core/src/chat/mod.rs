//! Chat domain module.
//!
//! A chat is one conversation between the user and the scripted assistant: an
//! append-only message log with an open/closed status.

mod model;
mod naming;

pub use model::{Chat, ChatStatus, Message, MessageRole, WELCOME_MESSAGE, generate_chat_id};
pub use naming::{DEFAULT_CHAT_NAME, FALLBACK_ISSUE_NAME, MAX_NAME_CHARS, summarize_issue_name, ticket_title};
