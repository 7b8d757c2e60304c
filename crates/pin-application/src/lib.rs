//! Application layer for Pin.
//!
//! Controllers for the three pages of the helpdesk: login, the chat/ticket
//! workspace, and the admin panel. Controllers receive repositories by
//! injection and never touch storage directly.

pub mod admin;
pub mod auth;
pub mod login;
pub mod workspace;

pub use admin::{AdminController, AdminPanel, AdminView, FlowsUpdate, LlmUpdate, RagUpdate};
pub use auth::{AuthGate, Entry, Page};
pub use login::{LoginController, LoginForm};
pub use workspace::{Action, Outcome, Panel, Screen, WorkspaceController};
