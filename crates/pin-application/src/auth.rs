//! Session gate shared by every authenticated page.

use std::sync::Arc;

use pin_core::error::Result;
use pin_core::session::{Session, SessionRepository};
use serde::Serialize;
use strum::{AsRefStr, Display};

/// Top-level pages. Navigating between them replaces the current controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    Login,
    Workspace,
    Admin,
}

/// Result of opening a page that requires a session.
#[derive(Debug)]
pub enum Entry<T> {
    /// The page is available.
    Ready(T),
    /// The caller must navigate elsewhere instead.
    Redirect(Page),
}

impl<T> Entry<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Redirect(_) => None,
        }
    }
}

/// The only access check in the system: an authenticated session exists.
///
/// There is no role distinction; any authenticated session may open every
/// page, admin included.
#[derive(Clone)]
pub struct AuthGate {
    sessions: Arc<dyn SessionRepository>,
}

impl AuthGate {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Returns the current session, or a redirect to login when there is no
    /// session or it is not marked authenticated.
    pub fn require(&self) -> Result<Entry<Session>> {
        match self.sessions.load_session()? {
            Some(session) if session.is_authenticated => Ok(Entry::Ready(session)),
            Some(_) => {
                tracing::debug!("session present but not authenticated, redirecting to login");
                Ok(Entry::Redirect(Page::Login))
            }
            None => {
                tracing::debug!("no session, redirecting to login");
                Ok(Entry::Redirect(Page::Login))
            }
        }
    }

    /// Deletes the session and returns the login page.
    pub fn logout(&self) -> Result<Page> {
        self.sessions.clear_session()?;
        tracing::info!("logged out");
        Ok(Page::Login)
    }
}
