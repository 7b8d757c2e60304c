//! Domain layer for the Pin helpdesk workspace.
//!
//! Holds the records persisted by the workspace (sessions, chats, tickets,
//! admin configuration, audit entries), the invariants they keep, and the
//! traits the infrastructure and application crates implement or consume.

pub mod admin;
pub mod chat;
pub mod error;
pub mod responder;
pub mod session;
pub mod storage;
pub mod ticket;
pub mod workspace;

// Re-export common error type
pub use error::{PinError, Result};
