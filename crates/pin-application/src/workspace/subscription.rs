//! Scoped action subscriptions.
//!
//! Every render of a workspace view replaces the active subscription. The
//! previous one is released together with everything it captured (bound
//! chat, strategy), so actions aimed at an old render cannot reach the new
//! state.

use std::fmt;

use pin_core::workspace::View;

use super::action::ActionKind;
use super::chat_view::ChatView;

/// Identifies one render's bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// What a subscription is bound to.
#[derive(Debug, Clone)]
pub enum Scope {
    /// A list view.
    List(View),
    /// A chat view for one chat.
    Chat(ChatView),
    /// The detail page of one ticket.
    Ticket { ticket_id: String },
}

/// Action bindings of the currently rendered view.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: SubscriptionId,
    scope: Scope,
    actions: Vec<ActionKind>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn accepts(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }

    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }
}

/// Holds at most one live subscription.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    next_id: u64,
    active: Option<Subscription>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases the active subscription and installs a new one.
    pub fn subscribe(&mut self, scope: Scope, actions: Vec<ActionKind>) -> SubscriptionId {
        self.release();
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        tracing::debug!(subscription = %id, bindings = actions.len(), "subscribed view");
        self.active = Some(Subscription { id, scope, actions });
        id
    }

    /// Drops the active subscription, if any.
    pub fn release(&mut self) {
        if let Some(previous) = self.active.take() {
            tracing::debug!(subscription = %previous.id, "released view subscription");
        }
    }

    /// Returns the active subscription when `id` is current and binds `kind`.
    pub fn resolve(&self, id: SubscriptionId, kind: ActionKind) -> Option<&Subscription> {
        self.active
            .as_ref()
            .filter(|sub| sub.id == id && sub.accepts(kind))
    }

    pub fn active(&self) -> Option<&Subscription> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_releases_previous() {
        let mut registry = SubscriptionRegistry::new();
        let first = registry.subscribe(Scope::List(View::OpenChats), vec![ActionKind::OpenChat]);
        let second =
            registry.subscribe(Scope::List(View::ClosedTickets), vec![ActionKind::ReopenChat]);

        assert_ne!(first, second);
        assert!(registry.resolve(first, ActionKind::OpenChat).is_none());
        assert!(registry.resolve(second, ActionKind::ReopenChat).is_some());
    }

    #[test]
    fn test_unbound_kind_is_rejected() {
        let mut registry = SubscriptionRegistry::new();
        let id = registry.subscribe(Scope::List(View::OpenChats), vec![ActionKind::OpenChat]);
        assert!(registry.resolve(id, ActionKind::GenerateTicket).is_none());
    }

    #[test]
    fn test_release_clears_active() {
        let mut registry = SubscriptionRegistry::new();
        let id = registry.subscribe(Scope::List(View::CreatedTickets), vec![ActionKind::ViewTicket]);
        registry.release();
        assert!(registry.active().is_none());
        assert!(registry.resolve(id, ActionKind::ViewTicket).is_none());
    }
}
