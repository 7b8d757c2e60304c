//! Workspace user actions.

use strum::{EnumDiscriminants, IntoStaticStr};

/// Something the user did inside a rendered view.
///
/// Each view binds a subset of [`ActionKind`]s; dispatching an action the
/// active view did not bind is ignored.
#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(ActionKind))]
#[strum_discriminants(derive(Hash, IntoStaticStr))]
pub enum Action {
    /// Send a message in the bound chat.
    SendMessage(String),
    /// Generate a ticket from the bound chat.
    GenerateTicket,
    /// Close the bound chat.
    CloseChat,
    /// Resume an entry of the open-chats list.
    OpenChat(String),
    /// Close an entry of the open-chats list.
    CloseListedChat(String),
    /// Show one ticket of the created-tickets list.
    ViewTicket(String),
    /// Leave the ticket detail for the list.
    BackToTickets,
    /// Resume the chat the shown ticket was generated from.
    OpenTicketChat,
    /// Re-open an entry of the closed list.
    ReopenChat(String),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        ActionKind::from(self)
    }
}
