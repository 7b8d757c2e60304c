//! Chat/ticket workspace.
//!
//! # Module Structure
//!
//! - `action`: User actions a rendered view can bind
//! - `subscription`: Scoped action bindings released on every view change
//! - `chat_view`: The chat component, parameterized by follow-up strategy
//! - `screen`: Render output (panel, counters, KPI list)
//! - `controller`: View router and action dispatch

mod action;
mod chat_view;
mod controller;
mod screen;
mod subscription;

pub use action::{Action, ActionKind};
pub use chat_view::{ChatMode, ChatView, Strategies};
pub use controller::{LOGOUT_ROUTE, Outcome, Route, WorkspaceController};
pub use screen::{ChatPanel, ChatSummary, Kpi, NO_SELECTION, Panel, Screen, TicketSummary};
pub use subscription::{Scope, Subscription, SubscriptionId, SubscriptionRegistry};
