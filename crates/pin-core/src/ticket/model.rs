//! Ticket models.
//!
//! A ticket is an immutable snapshot of a chat at the moment it was generated,
//! shaped as the payload a help-desk connector would receive.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chat::{Chat, Message, ticket_title};
use crate::session::Session;

/// Integration status recorded on every payload until a connector exists.
pub const INTEGRATION_STATUS_STUB: &str = "stub";
/// Integration target recorded on every payload.
pub const INTEGRATION_TARGET: &str = "ticketing-system";

/// Generates a human-readable ticket id such as `TCK-48213`.
pub fn generate_ticket_id() -> String {
    let number: u32 = rand::thread_rng().gen_range(10_000..=99_999);
    format!("TCK-{number}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub status: String,
    pub target: String,
}

impl Default for Integration {
    fn default() -> Self {
        Self {
            status: INTEGRATION_STATUS_STUB.to_string(),
            target: INTEGRATION_TARGET.to_string(),
        }
    }
}

/// Denormalized snapshot sent to the (stubbed) ticketing system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPayload {
    pub company: String,
    pub requester: Requester,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Copy of the chat log at generation time.
    pub transcript: Vec<Message>,
    #[serde(default)]
    pub integration: Integration,
}

/// A would-be help-desk submission generated from a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    /// The chat this ticket was generated from (a reference, not ownership).
    pub chat_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub payload: TicketPayload,
}

impl Ticket {
    /// Builds a ticket from the current state of `chat` on behalf of `session`.
    pub fn from_chat(chat: &Chat, session: &Session) -> Self {
        let title = ticket_title(&chat.name);
        let created_at = Utc::now();
        let payload = TicketPayload {
            company: session.company.clone(),
            requester: Requester {
                email: session.email.clone(),
                department: session.department.clone(),
            },
            title: title.clone(),
            created_at,
            transcript: chat.messages.clone(),
            integration: Integration::default(),
        };

        Self {
            id: generate_ticket_id(),
            chat_id: chat.id.clone(),
            title,
            created_at,
            payload,
        }
    }
}
