//! Turn-limit escalation.

use std::sync::Arc;

use super::{FollowUpContext, FollowUpStrategy};

/// Reply used once a chat reaches the turn limit.
pub const ESCALATION_PROMPT: &str = "We’ve gone back and forth a few times without a fix. I recommend generating a ticket so a technician can take it from here.";

/// Wraps a strategy and replaces its reply with [`ESCALATION_PROMPT`] once the
/// user has sent `max_turns` messages.
#[derive(Clone)]
pub struct Escalating {
    inner: Arc<dyn FollowUpStrategy>,
    max_turns: usize,
}

impl Escalating {
    pub fn new(inner: Arc<dyn FollowUpStrategy>, max_turns: usize) -> Self {
        Self { inner, max_turns }
    }

    pub fn should_escalate(&self, user_turns: usize) -> bool {
        self.max_turns > 0 && user_turns >= self.max_turns
    }
}

impl FollowUpStrategy for Escalating {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn follow_up(&self, context: &FollowUpContext<'_>) -> String {
        if self.should_escalate(context.user_turns) {
            tracing::debug!(
                strategy = self.inner.name(),
                turns = context.user_turns,
                max_turns = self.max_turns,
                "escalating chat"
            );
            return ESCALATION_PROMPT.to_string();
        }
        self.inner.follow_up(context)
    }
}
