//! Workspace view router.

use std::sync::Arc;

use pin_core::admin::AdminConfigRepository;
use pin_core::chat::Chat;
use pin_core::error::{PinError, Result};
use pin_core::session::{Session, SessionRepository};
use pin_core::ticket::Ticket;
use pin_core::workspace::{ConversationRepository, View, WorkspaceState};

use super::action::{Action, ActionKind};
use super::chat_view::{ChatMode, ChatView, Strategies};
use super::screen::{Kpi, Panel, Screen};
use super::subscription::{Scope, SubscriptionId, SubscriptionRegistry};
use crate::auth::{AuthGate, Entry, Page};

const CHAT_ACTIONS: [ActionKind; 3] = [
    ActionKind::SendMessage,
    ActionKind::GenerateTicket,
    ActionKind::CloseChat,
];
const TICKET_DETAIL_ACTIONS: [ActionKind; 2] =
    [ActionKind::BackToTickets, ActionKind::OpenTicketChat];

/// Name accepted by [`WorkspaceController::navigate`] that logs out.
pub const LOGOUT_ROUTE: &str = "logout";

/// Internal navigation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A navigation entry. `View::NewIssue` always starts a fresh chat.
    View(View),
    /// The selected chat in resumed mode.
    ResumeSelected,
    /// The detail page of one ticket.
    TicketDetail(String),
}

/// Result of a dispatch or navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Screen(Screen),
    Redirect(Page),
    /// The action was stale or referenced something that no longer exists.
    Ignored,
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Owns the loaded workspace state for one authenticated session and turns
/// navigation and user actions into screens.
///
/// Every route renders a new [`Screen`] whose subscription replaces the
/// previous one. Sending a message re-renders the chat in place under the
/// same subscription.
pub struct WorkspaceController {
    session: Session,
    gate: AuthGate,
    conversations: Arc<dyn ConversationRepository>,
    admin: Arc<dyn AdminConfigRepository>,
    strategies: Strategies,
    state: WorkspaceState,
    subscriptions: SubscriptionRegistry,
}

impl WorkspaceController {
    /// Opens the workspace, or redirects to login without a session.
    pub fn open(
        sessions: Arc<dyn SessionRepository>,
        conversations: Arc<dyn ConversationRepository>,
        admin: Arc<dyn AdminConfigRepository>,
    ) -> Result<Entry<Self>> {
        let gate = AuthGate::new(sessions);
        let session = match gate.require()? {
            Entry::Ready(session) => session,
            Entry::Redirect(page) => return Ok(Entry::Redirect(page)),
        };
        let state = conversations.load_state()?;
        tracing::debug!(
            chats = state.chats.len(),
            tickets = state.tickets.len(),
            view = %state.view,
            "opened workspace"
        );

        Ok(Entry::Ready(Self {
            session,
            gate,
            conversations,
            admin,
            strategies: Strategies::scripted(),
            state,
            subscriptions: SubscriptionRegistry::new(),
        }))
    }

    /// Replaces the per-mode follow-up strategies.
    pub fn with_strategies(mut self, strategies: Strategies) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    /// Looks up a created ticket by id.
    pub fn ticket(&self, ticket_id: &str) -> Result<&Ticket> {
        self.state
            .find_ticket(ticket_id)
            .ok_or_else(|| PinError::not_found("ticket", ticket_id))
    }

    pub fn active_subscription(&self) -> Option<SubscriptionId> {
        self.subscriptions.active().map(|sub| sub.id())
    }

    /// Renders the persisted view.
    pub fn start(&mut self) -> Result<Screen> {
        self.route(Route::View(self.state.view))
    }

    /// Navigates by name. Unknown names fall back to the new-issue view and
    /// `"logout"` ends the session.
    pub fn navigate(&mut self, name: &str) -> Result<Outcome> {
        if name == LOGOUT_ROUTE {
            return Ok(Outcome::Redirect(self.logout()?));
        }
        Ok(Outcome::Screen(self.route(Route::View(View::from_name(name)))?))
    }

    /// Deletes the session and releases the active subscription.
    pub fn logout(&mut self) -> Result<Page> {
        self.subscriptions.release();
        self.gate.logout()
    }

    pub fn route(&mut self, route: Route) -> Result<Screen> {
        match route {
            Route::View(View::NewIssue) => {
                let chat_id = self.state.add_chat(Chat::new()).id.clone();
                self.state.view = View::NewIssue;
                self.conversations.save_state(&self.state)?;
                tracing::debug!(chat_id = %chat_id, "started new chat");
                self.render_chat(chat_id, ChatMode::Fresh)
            }
            Route::View(view) => {
                self.state.view = view;
                self.conversations.save_state(&self.state)?;
                Ok(self.render_list(view))
            }
            Route::ResumeSelected => {
                let Some(chat_id) = self.state.selected_chat().map(|chat| chat.id.clone()) else {
                    tracing::trace!("no selected chat to resume");
                    return self.route(Route::View(View::OpenChats));
                };
                self.state.view = View::NewIssue;
                self.conversations.save_state(&self.state)?;
                self.render_chat(chat_id, ChatMode::Resumed)
            }
            Route::TicketDetail(ticket_id) => {
                let Some(ticket) = self.state.find_ticket(&ticket_id).cloned() else {
                    tracing::trace!(ticket_id = %ticket_id, "ticket not found");
                    return self.route(Route::View(View::CreatedTickets));
                };
                let subscription = self.subscriptions.subscribe(
                    Scope::Ticket { ticket_id },
                    TICKET_DETAIL_ACTIONS.to_vec(),
                );
                Ok(self.screen(
                    subscription,
                    View::CreatedTickets,
                    Panel::TicketDetail(Box::new(ticket)),
                    TICKET_DETAIL_ACTIONS.to_vec(),
                ))
            }
        }
    }

    /// Applies `action` if `subscription` is the current one and binds it.
    pub fn dispatch(&mut self, subscription: SubscriptionId, action: Action) -> Result<Outcome> {
        let scope = match self.subscriptions.resolve(subscription, action.kind()) {
            Some(sub) => sub.scope().clone(),
            None => {
                tracing::trace!(
                    subscription = %subscription,
                    action = <&'static str>::from(action.kind()),
                    "stale or unbound action ignored"
                );
                return Ok(Outcome::Ignored);
            }
        };

        match (scope, action) {
            (Scope::Chat(view), Action::SendMessage(text)) => {
                if !view.send(&mut self.state, self.conversations.as_ref(), &text)? {
                    return Ok(Outcome::Ignored);
                }
                Ok(self.refresh_chat(subscription, &view))
            }
            (Scope::Chat(view), Action::GenerateTicket) => {
                let Some(ticket_id) = view.generate_ticket(&mut self.state, &self.session) else {
                    return Ok(Outcome::Ignored);
                };
                self.conversations.save_state(&self.state)?;
                tracing::info!(ticket_id = %ticket_id, chat_id = view.chat_id(), "created ticket");
                self.screen_for(Route::View(View::CreatedTickets))
            }
            (Scope::Chat(view), Action::CloseChat) => {
                if !view.close(&mut self.state) {
                    return Ok(Outcome::Ignored);
                }
                self.conversations.save_state(&self.state)?;
                tracing::debug!(chat_id = view.chat_id(), "closed chat");
                self.screen_for(Route::View(View::ClosedTickets))
            }
            (Scope::List(View::OpenChats), Action::OpenChat(chat_id)) => {
                if self.state.find_chat(&chat_id).is_none() {
                    return Ok(Outcome::Ignored);
                }
                self.state.selected_chat_id = Some(chat_id);
                self.screen_for(Route::ResumeSelected)
            }
            (Scope::List(View::OpenChats), Action::CloseListedChat(chat_id)) => {
                let Some(chat) = self.state.find_chat_mut(&chat_id) else {
                    return Ok(Outcome::Ignored);
                };
                chat.close();
                self.conversations.save_state(&self.state)?;
                tracing::debug!(chat_id = %chat_id, "closed chat from list");
                self.screen_for(Route::View(View::OpenChats))
            }
            (Scope::List(View::CreatedTickets), Action::ViewTicket(ticket_id)) => {
                if self.state.find_ticket(&ticket_id).is_none() {
                    return Ok(Outcome::Ignored);
                }
                self.screen_for(Route::TicketDetail(ticket_id))
            }
            (Scope::Ticket { .. }, Action::BackToTickets) => {
                self.screen_for(Route::View(View::CreatedTickets))
            }
            (Scope::Ticket { ticket_id }, Action::OpenTicketChat) => {
                let Some(chat_id) = self
                    .state
                    .find_ticket(&ticket_id)
                    .map(|ticket| ticket.chat_id.clone())
                    .filter(|chat_id| self.state.find_chat(chat_id).is_some())
                else {
                    return Ok(Outcome::Ignored);
                };
                self.state.selected_chat_id = Some(chat_id);
                self.screen_for(Route::ResumeSelected)
            }
            (Scope::List(View::ClosedTickets), Action::ReopenChat(chat_id)) => {
                let Some(chat) = self.state.find_chat_mut(&chat_id) else {
                    return Ok(Outcome::Ignored);
                };
                chat.reopen();
                self.state.selected_chat_id = Some(chat_id);
                self.conversations.save_state(&self.state)?;
                self.screen_for(Route::ResumeSelected)
            }
            (scope, action) => {
                tracing::trace!(?scope, ?action, "action does not apply to scope");
                Ok(Outcome::Ignored)
            }
        }
    }

    fn screen_for(&mut self, route: Route) -> Result<Outcome> {
        Ok(Outcome::Screen(self.route(route)?))
    }

    fn render_chat(&mut self, chat_id: String, mode: ChatMode) -> Result<Screen> {
        let max_turns = self.admin.load_config()?.flows.max_turns_before_escalate as usize;
        let view = ChatView::new(chat_id, mode, self.strategies.escalating(mode, max_turns));
        let subscription = self
            .subscriptions
            .subscribe(Scope::Chat(view.clone()), CHAT_ACTIONS.to_vec());
        tracing::debug!(
            chat_id = view.chat_id(),
            mode = %mode,
            strategy = view.strategy_name(),
            max_turns,
            "rendered chat"
        );

        match self.refresh_chat(subscription, &view) {
            Outcome::Screen(screen) => Ok(screen),
            _ => Err(PinError::internal(format!(
                "chat {} vanished while rendering",
                view.chat_id()
            ))),
        }
    }

    fn refresh_chat(&self, subscription: SubscriptionId, view: &ChatView) -> Outcome {
        match view.render(&self.state) {
            Some(panel) => Outcome::Screen(self.screen(
                subscription,
                View::NewIssue,
                Panel::Chat(panel),
                CHAT_ACTIONS.to_vec(),
            )),
            None => Outcome::Ignored,
        }
    }

    fn render_list(&mut self, view: View) -> Screen {
        let (panel, actions) = match view {
            View::OpenChats => (
                Panel::open_chats(&self.state),
                vec![ActionKind::OpenChat, ActionKind::CloseListedChat],
            ),
            View::CreatedTickets => (
                Panel::created_tickets(&self.state),
                vec![ActionKind::ViewTicket],
            ),
            View::ClosedTickets => (
                Panel::closed_chats(&self.state),
                vec![ActionKind::ReopenChat],
            ),
            View::NewIssue => (Panel::open_chats(&self.state), Vec::new()),
        };
        let subscription = self.subscriptions.subscribe(Scope::List(view), actions.clone());
        tracing::debug!(view = %view, "rendered list");
        self.screen(subscription, view, panel, actions)
    }

    fn screen(
        &self,
        subscription: SubscriptionId,
        view: View,
        panel: Panel,
        actions: Vec<ActionKind>,
    ) -> Screen {
        let counts = self.state.counts();
        Screen {
            subscription,
            view,
            kpis: Kpi::collect(&self.session, &self.state, &counts),
            panel,
            actions,
            counts,
        }
    }
}
