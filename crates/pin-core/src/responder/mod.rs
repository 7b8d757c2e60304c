//! Follow-up responders.
//!
//! A responder picks the single scripted bot reply appended after each user
//! turn. The chat view only sees the [`FollowUpStrategy`] trait, so a real
//! language-model backend can replace the scripted rules later.

mod escalation;
mod keyword;
mod resume;

pub use escalation::{ESCALATION_PROMPT, Escalating};
pub use keyword::{DEFAULT_PROMPT, KeywordResponder, KeywordRule};
pub use resume::{RESUME_PROMPT, ResumeResponder};

use crate::chat::Chat;

/// What a strategy may look at when choosing a reply.
#[derive(Debug, Clone, Copy)]
pub struct FollowUpContext<'a> {
    /// Text of the most recent user message, empty if none.
    pub last_user_text: &'a str,
    /// Number of user messages in the chat, including the latest.
    pub user_turns: usize,
}

impl<'a> FollowUpContext<'a> {
    pub fn from_chat(chat: &'a Chat) -> Self {
        Self {
            last_user_text: chat.last_user_text().unwrap_or_default(),
            user_turns: chat.user_turns(),
        }
    }
}

/// Chooses the bot reply for one user turn.
pub trait FollowUpStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn follow_up(&self, context: &FollowUpContext<'_>) -> String;
}
