//! Chat and message models.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::naming::{DEFAULT_CHAT_NAME, summarize_issue_name};

/// First bot message of every new chat.
pub const WELCOME_MESSAGE: &str = "Hi! Describe what's going on, and I’ll ask the questions needed to resolve it — or build a ticket if we can’t.";

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 8;

/// Generates an opaque base-36 chat identifier.
///
/// Collisions are not checked for.
pub fn generate_chat_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

/// A single message in a chat log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub text: String,
    pub ts: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
            ts: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Bot,
            text: text.into(),
            ts: Utc::now(),
        }
    }
}

/// Lifecycle status of a chat.
///
/// Transitions are `Open -> Closed` and `Closed -> Open`, repeatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatStatus {
    #[default]
    Open,
    Closed,
}

/// One conversational session between a user and the scripted assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    /// Starts as "New Issue" and is replaced once by the naming heuristic.
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: ChatStatus,
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Set by the first generated ticket and never changed afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
}

impl Chat {
    /// Creates an open chat holding only the bot welcome message.
    pub fn new() -> Self {
        Self {
            id: generate_chat_id(),
            name: DEFAULT_CHAT_NAME.to_string(),
            created_at: Utc::now(),
            status: ChatStatus::Open,
            messages: vec![Message::bot(WELCOME_MESSAGE)],
            ticket_id: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ChatStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == ChatStatus::Closed
    }

    /// Appends a user message and, while the chat still has its default name,
    /// renames it from that message.
    pub fn push_user_message(&mut self, text: impl Into<String>) {
        let message = Message::user(text);
        if self.name == DEFAULT_CHAT_NAME {
            self.name = summarize_issue_name(&message.text);
        }
        self.messages.push(message);
    }

    pub fn push_bot_message(&mut self, text: impl Into<String>) {
        self.messages.push(Message::bot(text));
    }

    /// Text of the most recent user message.
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.text.as_str())
    }

    /// Number of user-authored messages so far.
    pub fn user_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count()
    }

    pub fn close(&mut self) {
        self.status = ChatStatus::Closed;
    }

    pub fn reopen(&mut self) {
        self.status = ChatStatus::Open;
    }

    /// Records the ticket generated from this chat.
    ///
    /// Returns `false` and leaves the chat untouched when a ticket is already
    /// attached.
    pub fn attach_ticket(&mut self, ticket_id: impl Into<String>) -> bool {
        if self.ticket_id.is_some() {
            return false;
        }
        self.ticket_id = Some(ticket_id.into());
        true
    }
}

impl Default for Chat {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_is_open_with_welcome() {
        let chat = Chat::new();
        assert_eq!(chat.status, ChatStatus::Open);
        assert_eq!(chat.name, DEFAULT_CHAT_NAME);
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].role, MessageRole::Bot);
        assert_eq!(chat.messages[0].text, WELCOME_MESSAGE);
        assert!(chat.ticket_id.is_none());
    }

    #[test]
    fn test_chat_ids_are_base36() {
        let id = generate_chat_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_first_user_message_names_chat_once() {
        let mut chat = Chat::new();
        chat.push_user_message("Printer won't print. It shows offline.");
        assert_eq!(chat.name, "Printer won't print");

        chat.push_user_message("Also the scanner is broken.");
        assert_eq!(chat.name, "Printer won't print");
    }

    #[test]
    fn test_last_user_text_and_turns() {
        let mut chat = Chat::new();
        assert_eq!(chat.last_user_text(), None);
        assert_eq!(chat.user_turns(), 0);

        chat.push_user_message("first");
        chat.push_bot_message("reply");
        chat.push_user_message("second");
        chat.push_bot_message("reply");

        assert_eq!(chat.last_user_text(), Some("second"));
        assert_eq!(chat.user_turns(), 2);
    }

    #[test]
    fn test_close_and_reopen_repeatedly() {
        let mut chat = Chat::new();
        for _ in 0..3 {
            chat.close();
            assert!(chat.is_closed());
            chat.reopen();
            assert!(chat.is_open());
        }
    }

    #[test]
    fn test_ticket_is_attached_once() {
        let mut chat = Chat::new();
        assert!(chat.attach_ticket("TCK-11111"));
        assert!(!chat.attach_ticket("TCK-22222"));
        assert_eq!(chat.ticket_id.as_deref(), Some("TCK-11111"));
    }

    #[test]
    fn test_wire_format() {
        let mut chat = Chat::new();
        chat.close();
        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["status"], "closed");
        assert_eq!(json["messages"][0]["role"], "bot");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("ticketId").is_none());
    }
}
