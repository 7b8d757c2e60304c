//! Terminal rendering of workspace screens.

use colored::Colorize;
use pin_application::workspace::{ChatPanel, ChatSummary, Panel, Screen};
use pin_core::chat::{Message, MessageRole};
use pin_core::ticket::Ticket;

pub fn screen(screen: &Screen) {
    println!();
    match &screen.panel {
        Panel::Chat(panel) => chat(panel),
        Panel::OpenChats(chats) => chat_list("Open Chats", chats, "No open chats."),
        Panel::ClosedChats(chats) => chat_list("Closed Chats", chats, "No closed chats yet."),
        Panel::CreatedTickets(tickets) => {
            println!("{}", "Created Tickets".bold());
            if tickets.is_empty() {
                println!("{}", "No tickets yet.".bright_black());
            }
            for (row, ticket) in tickets.iter().enumerate() {
                println!(
                    "  {:>2}. {}  {}  {}",
                    row + 1,
                    ticket.id.bold(),
                    ticket.title,
                    format!("chat {}", ticket.chat_id).bright_black()
                );
            }
        }
        Panel::TicketDetail(ticket) => ticket_detail(ticket),
    }
    status_line(screen);
}

/// Prints only the newest bot reply after a send.
pub fn latest_reply(screen: &Screen) {
    if let Some(reply) = newest_bot_reply(screen) {
        message(reply);
    }
}

fn newest_bot_reply(screen: &Screen) -> Option<&Message> {
    if let Panel::Chat(panel) = &screen.panel
        && let Some(reply) = panel.messages.last()
        && reply.role == MessageRole::Bot
    {
        return Some(reply);
    }
    None
}

fn chat(panel: &ChatPanel) {
    println!("{}", panel.heading.bold());
    if let Some(ticket_id) = &panel.ticket_id {
        println!("{}", format!("Ticket {ticket_id}").bright_black());
    }
    for msg in &panel.messages {
        message(msg);
    }
}

fn message(msg: &Message) {
    let author = match msg.role {
        MessageRole::User => "You".green().bold(),
        MessageRole::Bot => "Pin".bright_blue().bold(),
    };
    println!("{author}: {}", msg.text);
}

fn chat_list(title: &str, chats: &[ChatSummary], empty: &str) {
    println!("{}", title.bold());
    if chats.is_empty() {
        println!("{}", empty.bright_black());
    }
    for (row, chat) in chats.iter().enumerate() {
        let ticket = chat
            .ticket_id
            .as_deref()
            .map(|id| format!(" [{id}]"))
            .unwrap_or_default();
        println!(
            "  {:>2}. {}{}  {}",
            row + 1,
            chat.name,
            ticket.bright_black(),
            chat.id.bright_black()
        );
    }
}

fn ticket_detail(ticket: &Ticket) {
    println!("{} {}", ticket.id.bold(), ticket.title);
    match serde_json::to_string_pretty(&ticket.payload) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::warn!(error = %err, "failed to render ticket payload"),
    }
}

fn status_line(screen: &Screen) {
    let kpis: Vec<String> = screen
        .kpis
        .iter()
        .map(|kpi| format!("{}: {}", kpi.label, kpi.value))
        .collect();
    println!("{}", kpis.join(" | ").bright_black());
    let actions: Vec<&'static str> = screen.actions.iter().map(|kind| (*kind).into()).collect();
    if !actions.is_empty() {
        println!("{}", format!("actions: {}", actions.join(", ")).bright_black());
    }
}

#[cfg(test)]
mod tests {
    use pin_application::workspace::{ChatMode, Scope, SubscriptionRegistry};
    use pin_core::chat::ChatStatus;
    use pin_core::workspace::{Counts, View};

    use super::*;

    fn screen_with(panel: Panel) -> Screen {
        let mut registry = SubscriptionRegistry::new();
        Screen {
            subscription: registry.subscribe(Scope::List(View::NewIssue), Vec::new()),
            view: View::NewIssue,
            panel,
            actions: Vec::new(),
            counts: Counts::default(),
            kpis: Vec::new(),
        }
    }

    fn chat_with(messages: Vec<Message>) -> Screen {
        screen_with(Panel::Chat(ChatPanel {
            chat_id: "abcd1234".to_string(),
            heading: "New Issue".to_string(),
            mode: ChatMode::Fresh,
            status: ChatStatus::Open,
            messages,
            ticket_id: None,
        }))
    }

    #[test]
    fn test_newest_bot_reply_is_the_last_message() {
        let screen = chat_with(vec![
            Message::user("vpn down"),
            Message::bot("Which network?"),
            Message::user("office"),
            Message::bot("Try reconnecting."),
        ]);
        let reply = newest_bot_reply(&screen).map(|m| m.text.as_str());
        assert_eq!(reply, Some("Try reconnecting."));
    }

    #[test]
    fn test_no_reply_when_user_spoke_last_or_outside_a_chat() {
        let screen = chat_with(vec![Message::bot("Hello"), Message::user("still there?")]);
        assert!(newest_bot_reply(&screen).is_none());
        assert!(newest_bot_reply(&chat_with(Vec::new())).is_none());
        assert!(newest_bot_reply(&screen_with(Panel::OpenChats(Vec::new()))).is_none());
    }
}
