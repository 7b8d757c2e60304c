//! REPL input parsing.

use pin_application::Action;
use pin_application::workspace::{ActionKind, Panel, Screen};

/// Slash commands offered for completion.
pub const COMMAND_NAMES: [&str; 15] = [
    "new", "open", "tickets", "closed", "view", "ticket", "close", "resume", "reopen", "show",
    "back", "chat", "logout", "help", "quit",
];

/// Commands whose argument is a row of the current list.
pub const TARGET_COMMANDS: [&str; 4] = ["close", "resume", "reopen", "show"];

/// A selectable row of the current list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: String,
    pub label: String,
}

/// Rows the target commands can address on `screen`, in display order.
pub fn targets(screen: &Screen) -> Vec<Target> {
    match &screen.panel {
        Panel::OpenChats(chats) | Panel::ClosedChats(chats) => chats
            .iter()
            .map(|chat| Target {
                id: chat.id.clone(),
                label: chat.name.clone(),
            })
            .collect(),
        Panel::CreatedTickets(tickets) => tickets
            .iter()
            .map(|ticket| Target {
                id: ticket.id.clone(),
                label: ticket.title.clone(),
            })
            .collect(),
        Panel::Chat(_) | Panel::TicketDetail(_) => Vec::new(),
    }
}

/// One parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(String),
    Act(Action),
    Help,
    Quit,
    /// Feedback for the user; nothing is dispatched.
    Invalid(String),
}

/// Parses `line` against the screen it was typed at.
///
/// Plain text sends a chat message. Commands taking a target accept either an
/// id or the 1-based row number of the current list. A bare `quit` or `exit`
/// leaves the REPL except in a chat, where it is sent like any other text;
/// `/quit` always leaves.
pub fn parse(line: &str, screen: &Screen) -> Command {
    let line = line.trim();
    let in_chat = matches!(screen.panel, Panel::Chat(_));
    if !in_chat && matches!(line, "quit" | "exit") {
        return Command::Quit;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Act(Action::SendMessage(line.to_string()));
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (rest, None),
    };

    match (name, arg) {
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        ("new", _) => Command::Navigate("newIssue".to_string()),
        ("open", _) => Command::Navigate("openChats".to_string()),
        ("tickets", _) => Command::Navigate("createdTickets".to_string()),
        ("closed", _) => Command::Navigate("closedTickets".to_string()),
        ("logout", _) => Command::Navigate("logout".to_string()),
        ("view", Some(view)) => Command::Navigate(view.to_string()),
        ("ticket", None) => Command::Act(Action::GenerateTicket),
        ("back", None) => Command::Act(Action::BackToTickets),
        ("chat", None) => Command::Act(Action::OpenTicketChat),
        ("close", None) => Command::Act(Action::CloseChat),
        ("close", Some(target)) => target_action(screen, target, ActionKind::CloseListedChat),
        ("resume", Some(target)) => target_action(screen, target, ActionKind::OpenChat),
        ("reopen", Some(target)) => target_action(screen, target, ActionKind::ReopenChat),
        ("show", Some(target)) => target_action(screen, target, ActionKind::ViewTicket),
        (name, _) => Command::Invalid(format!("Unknown command /{name}. Type /help.")),
    }
}

fn target_action(screen: &Screen, target: &str, kind: ActionKind) -> Command {
    let id = resolve_target(screen, target);
    match kind {
        ActionKind::CloseListedChat => Command::Act(Action::CloseListedChat(id)),
        ActionKind::OpenChat => Command::Act(Action::OpenChat(id)),
        ActionKind::ReopenChat => Command::Act(Action::ReopenChat(id)),
        ActionKind::ViewTicket => Command::Act(Action::ViewTicket(id)),
        other => Command::Invalid(format!("{} takes no target", <&'static str>::from(other))),
    }
}

fn resolve_target(screen: &Screen, target: &str) -> String {
    let Ok(row) = target.parse::<usize>() else {
        return target.to_string();
    };
    row.checked_sub(1)
        .and_then(|index| targets(screen).into_iter().nth(index))
        .map(|row| row.id)
        .unwrap_or_else(|| target.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pin_application::workspace::{ChatMode, ChatPanel, ChatSummary, SubscriptionRegistry};
    use pin_core::chat::ChatStatus;
    use pin_core::workspace::{Counts, View};

    use super::*;

    fn screen_with(panel: Panel) -> Screen {
        let mut registry = SubscriptionRegistry::new();
        let subscription = registry.subscribe(
            pin_application::workspace::Scope::List(View::OpenChats),
            vec![ActionKind::OpenChat],
        );
        Screen {
            subscription,
            view: View::OpenChats,
            panel,
            actions: vec![ActionKind::OpenChat],
            counts: Counts::default(),
            kpis: Vec::new(),
        }
    }

    fn list_screen() -> Screen {
        screen_with(Panel::OpenChats(vec![ChatSummary {
            id: "abcd1234".to_string(),
            name: "VPN".to_string(),
            created_at: Utc::now(),
            ticket_id: None,
        }]))
    }

    fn chat_screen() -> Screen {
        screen_with(Panel::Chat(ChatPanel {
            chat_id: "abcd1234".to_string(),
            heading: "New Issue".to_string(),
            mode: ChatMode::Fresh,
            status: ChatStatus::Open,
            messages: Vec::new(),
            ticket_id: None,
        }))
    }

    #[test]
    fn test_plain_text_sends() {
        assert_eq!(
            parse("  printer jammed ", &list_screen()),
            Command::Act(Action::SendMessage("printer jammed".to_string()))
        );
    }

    #[test]
    fn test_row_numbers_resolve_to_ids() {
        let screen = list_screen();
        assert_eq!(
            parse("/resume 1", &screen),
            Command::Act(Action::OpenChat("abcd1234".to_string()))
        );
        assert_eq!(
            parse("/resume 7", &screen),
            Command::Act(Action::OpenChat("7".to_string()))
        );
    }

    #[test]
    fn test_navigation_and_unknown() {
        let screen = list_screen();
        assert_eq!(parse("/open", &screen), Command::Navigate("openChats".to_string()));
        assert_eq!(parse("/view dashboard", &screen), Command::Navigate("dashboard".to_string()));
        assert_eq!(parse("exit", &screen), Command::Quit);
        assert!(matches!(parse("/frobnicate", &screen), Command::Invalid(_)));
    }

    #[test]
    fn test_quit_words_are_chat_text_inside_a_chat() {
        let screen = chat_screen();
        assert_eq!(
            parse("quit", &screen),
            Command::Act(Action::SendMessage("quit".to_string()))
        );
        assert_eq!(
            parse(" exit ", &screen),
            Command::Act(Action::SendMessage("exit".to_string()))
        );
        assert_eq!(parse("/quit", &screen), Command::Quit);
        assert_eq!(parse("quit", &list_screen()), Command::Quit);
    }

    #[test]
    fn test_targets_follow_list_order() {
        let rows = targets(&list_screen());
        assert_eq!(
            rows,
            vec![Target {
                id: "abcd1234".to_string(),
                label: "VPN".to_string()
            }]
        );
        assert!(targets(&chat_screen()).is_empty());
    }
}
