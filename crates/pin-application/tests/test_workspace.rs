use std::sync::Arc;

use pin_application::workspace::{ChatMode, Outcome, Screen, Strategies};
use pin_application::{Action, Entry, LoginController, LoginForm, Page, Panel, WorkspaceController};
use pin_core::admin::AdminConfigRepository;
use pin_core::chat::{ChatStatus, MessageRole, WELCOME_MESSAGE};
use pin_core::responder::{
    DEFAULT_PROMPT, ESCALATION_PROMPT, FollowUpContext, FollowUpStrategy, RESUME_PROMPT,
};
use pin_core::session::SessionRepository;
use pin_core::workspace::View;
use pin_infrastructure::{JsonFileStore, MemoryStore, Repositories};
use tempfile::TempDir;

const VPN_PROMPT: &str = "VPN issue — which client (AnyConnect, GlobalProtect, Windows built-in) and are you offsite? Any error code?";

fn logged_in(store: MemoryStore) -> Repositories {
    let repos = Repositories::new(Arc::new(store));
    LoginController::new(repos.sessions.clone())
        .login(&LoginForm::default())
        .expect("Should log in");
    repos
}

fn open(repos: &Repositories) -> WorkspaceController {
    WorkspaceController::open(
        repos.sessions.clone(),
        repos.conversations.clone(),
        repos.admin.clone(),
    )
    .expect("Should open workspace")
    .ready()
    .expect("Session should exist")
}

fn expect_screen(outcome: Outcome) -> Screen {
    match outcome {
        Outcome::Screen(screen) => screen,
        other => panic!("expected a screen, got {other:?}"),
    }
}

fn chat_panel(screen: &Screen) -> &pin_application::workspace::ChatPanel {
    match &screen.panel {
        Panel::Chat(panel) => panel,
        other => panic!("expected chat panel, got {other:?}"),
    }
}

fn send(controller: &mut WorkspaceController, screen: &Screen, text: &str) -> Screen {
    expect_screen(
        controller
            .dispatch(screen.subscription, Action::SendMessage(text.to_string()))
            .expect("Should send"),
    )
}

#[test]
fn test_redirects_to_login_without_session() {
    let repos = Repositories::new(Arc::new(MemoryStore::new()));
    let entry = WorkspaceController::open(
        repos.sessions.clone(),
        repos.conversations.clone(),
        repos.admin.clone(),
    )
    .unwrap();
    assert!(matches!(entry, Entry::Redirect(Page::Login)));
}

#[test]
fn test_new_issue_starts_open_chat_with_welcome() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = controller.start().unwrap();

    assert_eq!(screen.view, View::NewIssue);
    let panel = chat_panel(&screen);
    assert_eq!(panel.mode, ChatMode::Fresh);
    assert_eq!(panel.heading, "New Issue");
    assert_eq!(panel.status, ChatStatus::Open);
    assert_eq!(panel.messages.len(), 1);
    assert_eq!(panel.messages[0].role, MessageRole::Bot);
    assert_eq!(panel.messages[0].text, WELCOME_MESSAGE);
    assert_eq!(screen.counts.open_chats, 1);
    assert_eq!(screen.kpi("Company"), Some("ACME"));
    assert_eq!(screen.kpi("Selected"), Some("New Issue"));
}

#[test]
fn test_first_message_names_chat_and_gets_keyword_reply() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = controller.start().unwrap();

    let screen = send(&mut controller, &screen, "Printer won't print. It shows offline.");
    let chat = controller.state().selected_chat().unwrap();
    assert_eq!(chat.name, "Printer won't print");
    assert_eq!(chat.messages.len(), 3);
    assert!(chat.messages[2].text.starts_with("Printer issue"));
    assert_eq!(chat_panel(&screen).messages.len(), 3);
}

#[test]
fn test_vpn_and_generic_prompts() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);

    let screen = controller.start().unwrap();
    let screen = send(&mut controller, &screen, "My VPN keeps dropping");
    assert_eq!(chat_panel(&screen).messages.last().unwrap().text, VPN_PROMPT);

    let screen = expect_screen(controller.navigate("newIssue").unwrap());
    let screen = send(&mut controller, &screen, "My laptop is slow");
    assert_eq!(chat_panel(&screen).messages.last().unwrap().text, DEFAULT_PROMPT);
}

#[test]
fn test_blank_message_is_ignored() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = controller.start().unwrap();

    let outcome = controller
        .dispatch(screen.subscription, Action::SendMessage("   ".to_string()))
        .unwrap();
    assert!(outcome.is_ignored());
    assert_eq!(controller.state().selected_chat().unwrap().messages.len(), 1);
}

#[test]
fn test_ticket_from_unnamed_chat_is_titled_issue() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = controller.start().unwrap();

    let screen = expect_screen(
        controller
            .dispatch(screen.subscription, Action::GenerateTicket)
            .unwrap(),
    );
    assert_eq!(screen.view, View::CreatedTickets);
    let Panel::CreatedTickets(tickets) = &screen.panel else {
        panic!("expected ticket list");
    };
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].title, "Issue");
    assert!(tickets[0].id.starts_with("TCK-"));

    let chat = controller.state().selected_chat().unwrap();
    assert_eq!(chat.ticket_id.as_deref(), Some(tickets[0].id.as_str()));
    assert_eq!(screen.counts.tickets, 1);
}

#[test]
fn test_ticket_snapshot_is_detached_from_chat() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = controller.start().unwrap();
    let screen = send(&mut controller, &screen, "Email will not sync");
    let chat_id = chat_panel(&screen).chat_id.clone();

    let screen = expect_screen(
        controller
            .dispatch(screen.subscription, Action::GenerateTicket)
            .unwrap(),
    );
    let ticket_id = controller.state().tickets[0].id.clone();

    // Resume the chat from the ticket detail and keep talking.
    let screen = expect_screen(
        controller
            .dispatch(screen.subscription, Action::ViewTicket(ticket_id.clone()))
            .unwrap(),
    );
    assert!(matches!(screen.panel, Panel::TicketDetail(_)));
    let screen = expect_screen(
        controller
            .dispatch(screen.subscription, Action::OpenTicketChat)
            .unwrap(),
    );
    assert_eq!(chat_panel(&screen).chat_id, chat_id);
    send(&mut controller, &screen, "Still broken");

    let ticket = controller.state().find_ticket(&ticket_id).unwrap();
    assert_eq!(ticket.payload.transcript.len(), 3);
    assert_eq!(controller.state().find_chat(&chat_id).unwrap().messages.len(), 5);
}

#[test]
fn test_close_and_reopen_retains_history() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = controller.start().unwrap();
    let screen = send(&mut controller, &screen, "Monitor flickers");
    let chat_id = chat_panel(&screen).chat_id.clone();

    let screen = expect_screen(controller.dispatch(screen.subscription, Action::CloseChat).unwrap());
    assert_eq!(screen.view, View::ClosedTickets);
    assert_eq!(screen.counts.closed_chats, 1);

    let screen = expect_screen(
        controller
            .dispatch(screen.subscription, Action::ReopenChat(chat_id.clone()))
            .unwrap(),
    );
    let panel = chat_panel(&screen);
    assert_eq!(panel.mode, ChatMode::Resumed);
    assert_eq!(panel.heading, "Monitor flickers");
    assert_eq!(panel.status, ChatStatus::Open);
    assert_eq!(panel.messages.len(), 3);
    assert_eq!(controller.state().selected_chat_id.as_deref(), Some(chat_id.as_str()));

    let screen = send(&mut controller, &screen, "Started after the update");
    assert_eq!(chat_panel(&screen).messages.last().unwrap().text, RESUME_PROMPT);
}

#[test]
fn test_open_chats_list_actions() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    controller.start().unwrap();
    controller.navigate("newIssue").unwrap();

    let screen = expect_screen(controller.navigate("openChats").unwrap());
    let Panel::OpenChats(chats) = &screen.panel else {
        panic!("expected open chats");
    };
    assert_eq!(chats.len(), 2);
    let closing = chats[0].id.clone();
    let keeping = chats[1].id.clone();

    let screen = expect_screen(
        controller
            .dispatch(screen.subscription, Action::CloseListedChat(closing))
            .unwrap(),
    );
    let Panel::OpenChats(chats) = &screen.panel else {
        panic!("expected open chats");
    };
    assert_eq!(chats.len(), 1);

    let screen = expect_screen(
        controller
            .dispatch(screen.subscription, Action::OpenChat(keeping.clone()))
            .unwrap(),
    );
    assert_eq!(chat_panel(&screen).chat_id, keeping);
}

#[test]
fn test_stale_subscription_is_ignored() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let chat_screen = controller.start().unwrap();
    controller.navigate("openChats").unwrap();

    let outcome = controller
        .dispatch(chat_screen.subscription, Action::SendMessage("hello".to_string()))
        .unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(controller.state().chats[0].messages.len(), 1);
}

#[test]
fn test_unbound_action_and_missing_entity_are_ignored() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = expect_screen(controller.navigate("closedTickets").unwrap());

    assert!(
        controller
            .dispatch(screen.subscription, Action::GenerateTicket)
            .unwrap()
            .is_ignored()
    );
    assert!(
        controller
            .dispatch(screen.subscription, Action::ReopenChat("missing".to_string()))
            .unwrap()
            .is_ignored()
    );
}

#[test]
fn test_unknown_view_falls_back_and_logout_redirects() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);

    let screen = expect_screen(controller.navigate("dashboard").unwrap());
    assert_eq!(screen.view, View::NewIssue);

    assert_eq!(controller.navigate("logout").unwrap(), Outcome::Redirect(Page::Login));
    assert!(repos.sessions.load_session().unwrap().is_none());
    assert!(controller.active_subscription().is_none());
}

#[test]
fn test_escalates_after_configured_turns() {
    let repos = logged_in(MemoryStore::new());
    let mut config = repos.admin.load_config().unwrap();
    config.flows.max_turns_before_escalate = 3;
    repos.admin.save_config(&config).unwrap();

    let mut controller = open(&repos);
    let mut screen = controller.start().unwrap();
    for text in ["vpn down", "still down", "tried rebooting"] {
        screen = send(&mut controller, &screen, text);
    }

    let messages = &chat_panel(&screen).messages;
    assert_eq!(messages[2].text, VPN_PROMPT);
    assert_eq!(messages.last().unwrap().text, ESCALATION_PROMPT);
}

#[test]
fn test_state_survives_reopen_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path()).unwrap();
    let repos = Repositories::new(Arc::new(store));
    LoginController::new(repos.sessions.clone())
        .login(&LoginForm::default())
        .unwrap();

    let mut controller = open(&repos);
    let screen = controller.start().unwrap();
    send(&mut controller, &screen, "Outlook crashes on start");
    controller.navigate("openChats").unwrap();
    drop(controller);

    let reopened = Repositories::new(Arc::new(JsonFileStore::open(temp_dir.path()).unwrap()));
    let mut controller = open(&reopened);
    assert_eq!(controller.state().view, View::OpenChats);
    let screen = controller.start().unwrap();
    let Panel::OpenChats(chats) = &screen.panel else {
        panic!("expected open chats");
    };
    assert_eq!(chats[0].name, "Outlook crashes on start");
}

struct EchoResponder;

impl FollowUpStrategy for EchoResponder {
    fn name(&self) -> &str {
        "echo"
    }

    fn follow_up(&self, context: &FollowUpContext<'_>) -> String {
        format!("echo {}: {}", context.user_turns, context.last_user_text)
    }
}

#[test]
fn test_injected_strategies_drive_replies() {
    let repos = logged_in(MemoryStore::new());
    let echo: Arc<dyn FollowUpStrategy> = Arc::new(EchoResponder);
    let mut controller =
        open(&repos).with_strategies(Strategies::new(echo.clone(), echo));

    let screen = controller.start().unwrap();
    let screen = send(&mut controller, &screen, "vpn down");
    assert_eq!(chat_panel(&screen).messages.last().unwrap().text, "echo 1: vpn down");
}

#[test]
fn test_ticket_lookup_reports_missing_id() {
    let repos = logged_in(MemoryStore::new());
    let mut controller = open(&repos);
    let screen = controller.start().unwrap();
    controller
        .dispatch(screen.subscription, Action::GenerateTicket)
        .unwrap();

    let ticket_id = controller.state().tickets[0].id.clone();
    assert_eq!(controller.ticket(&ticket_id).unwrap().title, "Issue");

    let err = controller.ticket("TCK-00000").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Entity not found: ticket 'TCK-00000'");
}
