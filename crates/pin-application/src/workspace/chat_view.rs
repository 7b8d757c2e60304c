//! The chat component.
//!
//! Fresh and resumed chats render and behave identically apart from the
//! follow-up strategy and heading, so both are one [`ChatView`] bound to a
//! chat id and a strategy.

use std::fmt;
use std::sync::Arc;

use pin_core::chat::DEFAULT_CHAT_NAME;
use pin_core::error::Result;
use pin_core::responder::{
    Escalating, FollowUpContext, FollowUpStrategy, KeywordResponder, ResumeResponder,
};
use pin_core::session::Session;
use pin_core::ticket::Ticket;
use pin_core::workspace::{ConversationRepository, WorkspaceState};
use serde::Serialize;
use strum::{AsRefStr, Display};

use super::screen::ChatPanel;

/// How the chat was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ChatMode {
    /// Created by entering the new-issue view.
    Fresh,
    /// Selected from a list or re-opened.
    Resumed,
}

/// Follow-up strategies per [`ChatMode`], before escalation is applied.
#[derive(Clone)]
pub struct Strategies {
    fresh: Arc<dyn FollowUpStrategy>,
    resumed: Arc<dyn FollowUpStrategy>,
}

impl Strategies {
    pub fn new(fresh: Arc<dyn FollowUpStrategy>, resumed: Arc<dyn FollowUpStrategy>) -> Self {
        Self { fresh, resumed }
    }

    /// Keyword rules for fresh chats, the resume prompt for resumed ones.
    pub fn scripted() -> Self {
        Self::new(
            Arc::new(KeywordResponder::helpdesk()),
            Arc::new(ResumeResponder),
        )
    }

    pub fn for_mode(&self, mode: ChatMode) -> Arc<dyn FollowUpStrategy> {
        match mode {
            ChatMode::Fresh => self.fresh.clone(),
            ChatMode::Resumed => self.resumed.clone(),
        }
    }

    /// The strategy for `mode` wrapped in the turn-limit escalation policy.
    pub fn escalating(&self, mode: ChatMode, max_turns: usize) -> Arc<dyn FollowUpStrategy> {
        Arc::new(Escalating::new(self.for_mode(mode), max_turns))
    }
}

impl Default for Strategies {
    fn default() -> Self {
        Self::scripted()
    }
}

impl fmt::Debug for Strategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategies")
            .field("fresh", &self.fresh.name())
            .field("resumed", &self.resumed.name())
            .finish()
    }
}

/// A chat bound to a follow-up strategy.
#[derive(Clone)]
pub struct ChatView {
    chat_id: String,
    mode: ChatMode,
    strategy: Arc<dyn FollowUpStrategy>,
}

impl fmt::Debug for ChatView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatView")
            .field("chat_id", &self.chat_id)
            .field("mode", &self.mode)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl ChatView {
    pub fn new(
        chat_id: impl Into<String>,
        mode: ChatMode,
        strategy: Arc<dyn FollowUpStrategy>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            mode,
            strategy,
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Builds the panel for the bound chat, if it still exists.
    pub fn render(&self, state: &WorkspaceState) -> Option<ChatPanel> {
        let chat = state.find_chat(&self.chat_id)?;
        let heading = match self.mode {
            ChatMode::Fresh => DEFAULT_CHAT_NAME.to_string(),
            ChatMode::Resumed => chat.name.clone(),
        };
        Some(ChatPanel {
            chat_id: chat.id.clone(),
            heading,
            mode: self.mode,
            status: chat.status,
            messages: chat.messages.clone(),
            ticket_id: chat.ticket_id.clone(),
        })
    }

    /// Appends the user's message and exactly one bot reply.
    ///
    /// State is persisted after each append. Returns `false` without touching
    /// anything when the trimmed text is empty or the chat is gone.
    pub fn send(
        &self,
        state: &mut WorkspaceState,
        conversations: &dyn ConversationRepository,
        text: &str,
    ) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        let Some(chat) = state.find_chat_mut(&self.chat_id) else {
            tracing::trace!(chat_id = %self.chat_id, "send to missing chat ignored");
            return Ok(false);
        };
        chat.push_user_message(text);
        conversations.save_state(state)?;

        let Some(chat) = state.find_chat_mut(&self.chat_id) else {
            return Ok(false);
        };
        let reply = self.strategy.follow_up(&FollowUpContext::from_chat(chat));
        chat.push_bot_message(reply);
        tracing::debug!(
            chat_id = %self.chat_id,
            strategy = self.strategy.name(),
            turns = chat.user_turns(),
            "appended follow-up"
        );
        conversations.save_state(state)?;
        Ok(true)
    }

    /// Snapshots the bound chat into a new ticket and returns its id.
    ///
    /// The chat's `ticket_id` is only stamped the first time. The caller
    /// persists.
    pub fn generate_ticket(&self, state: &mut WorkspaceState, session: &Session) -> Option<String> {
        let chat = state.find_chat_mut(&self.chat_id)?;
        let ticket = Ticket::from_chat(chat, session);
        let ticket_id = ticket.id.clone();
        if !chat.attach_ticket(ticket_id.clone()) {
            tracing::debug!(chat_id = %self.chat_id, "chat already references a ticket");
        }
        state.add_ticket(ticket);
        Some(ticket_id)
    }

    /// Marks the bound chat closed. The caller persists.
    pub fn close(&self, state: &mut WorkspaceState) -> bool {
        match state.find_chat_mut(&self.chat_id) {
            Some(chat) => {
                chat.close();
                true
            }
            None => false,
        }
    }
}
