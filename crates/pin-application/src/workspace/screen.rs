//! Workspace render output.

use chrono::{DateTime, Utc};
use pin_core::chat::{Chat, ChatStatus, Message};
use pin_core::session::Session;
use pin_core::ticket::Ticket;
use pin_core::workspace::{Counts, View, WorkspaceState};

use super::action::ActionKind;
use super::chat_view::ChatMode;
use super::subscription::SubscriptionId;

/// KPI value shown when no chat is selected.
pub const NO_SELECTION: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPanel {
    pub chat_id: String,
    pub heading: String,
    pub mode: ChatMode,
    pub status: ChatStatus,
    pub messages: Vec<Message>,
    pub ticket_id: Option<String>,
}

/// One row of a chat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub ticket_id: Option<String>,
}

impl From<&Chat> for ChatSummary {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id.clone(),
            name: chat.name.clone(),
            created_at: chat.created_at,
            ticket_id: chat.ticket_id.clone(),
        }
    }
}

/// One row of the created-tickets list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSummary {
    pub id: String,
    pub chat_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Ticket> for TicketSummary {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            chat_id: ticket.chat_id.clone(),
            title: ticket.title.clone(),
            created_at: ticket.created_at,
        }
    }
}

/// The primary panel of a rendered view.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Chat(ChatPanel),
    OpenChats(Vec<ChatSummary>),
    CreatedTickets(Vec<TicketSummary>),
    TicketDetail(Box<Ticket>),
    ClosedChats(Vec<ChatSummary>),
}

impl Panel {
    pub(crate) fn open_chats(state: &WorkspaceState) -> Self {
        Self::OpenChats(state.open_chats().map(ChatSummary::from).collect())
    }

    pub(crate) fn closed_chats(state: &WorkspaceState) -> Self {
        Self::ClosedChats(state.closed_chats().map(ChatSummary::from).collect())
    }

    pub(crate) fn created_tickets(state: &WorkspaceState) -> Self {
        Self::CreatedTickets(state.tickets.iter().map(TicketSummary::from).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
}

impl Kpi {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }

    pub(crate) fn collect(session: &Session, state: &WorkspaceState, counts: &Counts) -> Vec<Self> {
        let selected = state
            .selected_chat()
            .map(|chat| chat.name.clone())
            .unwrap_or_else(|| NO_SELECTION.to_string());
        vec![
            Self::new("Company", &session.company),
            Self::new("User", &session.email),
            Self::new("Department", &session.department),
            Self::new("Open chats", counts.open_chats),
            Self::new("Closed chats", counts.closed_chats),
            Self::new("Selected", selected),
        ]
    }
}

/// Everything one workspace render produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Dispatch actions against this id; it goes stale on the next render.
    pub subscription: SubscriptionId,
    /// Navigation entry to highlight.
    pub view: View,
    pub panel: Panel,
    pub actions: Vec<ActionKind>,
    pub counts: Counts,
    pub kpis: Vec<Kpi>,
}

impl Screen {
    pub fn accepts(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }

    pub fn kpi(&self, label: &str) -> Option<&str> {
        self.kpis
            .iter()
            .find(|kpi| kpi.label == label)
            .map(|kpi| kpi.value.as_str())
    }
}
