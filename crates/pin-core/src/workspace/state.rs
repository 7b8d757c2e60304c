//! Persisted workspace state.

use serde::{Deserialize, Serialize};

use super::view::View;
use crate::chat::Chat;
use crate::ticket::Ticket;

/// Schema version written with every state blob.
pub const STATE_VERSION: u32 = 1;

/// Everything the workspace persists under a single key.
///
/// Chats and tickets are both kept newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    #[serde(default)]
    pub chats: Vec<Chat>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub selected_chat_id: Option<String>,
    #[serde(default)]
    pub view: View,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    STATE_VERSION
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self {
            chats: Vec::new(),
            tickets: Vec::new(),
            selected_chat_id: None,
            view: View::NewIssue,
            version: STATE_VERSION,
        }
    }
}

/// Sidebar counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub open_chats: usize,
    pub tickets: usize,
    pub closed_chats: usize,
}

impl WorkspaceState {
    pub fn find_chat(&self, chat_id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    pub fn find_chat_mut(&mut self, chat_id: &str) -> Option<&mut Chat> {
        self.chats.iter_mut().find(|c| c.id == chat_id)
    }

    pub fn find_ticket(&self, ticket_id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == ticket_id)
    }

    pub fn selected_chat(&self) -> Option<&Chat> {
        self.selected_chat_id
            .as_deref()
            .and_then(|id| self.find_chat(id))
    }

    pub fn selected_chat_mut(&mut self) -> Option<&mut Chat> {
        let id = self.selected_chat_id.clone()?;
        self.find_chat_mut(&id)
    }

    /// Inserts a chat at the front and selects it.
    pub fn add_chat(&mut self, chat: Chat) -> &Chat {
        self.selected_chat_id = Some(chat.id.clone());
        self.chats.insert(0, chat);
        &self.chats[0]
    }

    /// Inserts a ticket at the front of the collection.
    pub fn add_ticket(&mut self, ticket: Ticket) {
        self.tickets.insert(0, ticket);
    }

    pub fn open_chats(&self) -> impl Iterator<Item = &Chat> {
        self.chats.iter().filter(|c| c.is_open())
    }

    pub fn closed_chats(&self) -> impl Iterator<Item = &Chat> {
        self.chats.iter().filter(|c| c.is_closed())
    }

    pub fn counts(&self) -> Counts {
        Counts {
            open_chats: self.open_chats().count(),
            tickets: self.tickets.len(),
            closed_chats: self.closed_chats().count(),
        }
    }
}
