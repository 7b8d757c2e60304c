//! Responder for chats resumed from a list.

use super::{FollowUpContext, FollowUpStrategy};

pub const RESUME_PROMPT: &str = "Thanks — what changed right before this started happening?";

/// Always asks what changed; used once a chat has been re-opened.
#[derive(Debug, Clone, Default)]
pub struct ResumeResponder;

impl FollowUpStrategy for ResumeResponder {
    fn name(&self) -> &str {
        "resume"
    }

    fn follow_up(&self, _context: &FollowUpContext<'_>) -> String {
        RESUME_PROMPT.to_string()
    }
}
