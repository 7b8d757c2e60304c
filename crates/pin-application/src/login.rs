//! Login page controller.
//!
//! There is no credential check of any kind: logging in always succeeds and
//! fabricates a session. Real identity verification belongs to an external
//! identity provider.

use std::sync::Arc;

use pin_core::error::Result;
use pin_core::session::{
    DEFAULT_COMPANY, DEFAULT_DEPARTMENT, DEFAULT_EMAIL, RememberedLogin, Session,
    SessionRepository,
};

use crate::auth::Page;

/// Values shown in (and submitted from) the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub company: String,
    pub email: String,
    pub department: String,
    /// Accepted and ignored.
    pub password: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            company: DEFAULT_COMPANY.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            password: String::new(),
        }
    }
}

impl From<RememberedLogin> for LoginForm {
    fn from(remembered: RememberedLogin) -> Self {
        let filled = remembered.or_defaults();
        Self {
            company: filled.company,
            email: filled.email,
            department: filled.department,
            password: String::new(),
        }
    }
}

pub struct LoginController {
    sessions: Arc<dyn SessionRepository>,
}

impl LoginController {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// The form pre-filled from remembered values, or the defaults.
    pub fn form(&self) -> Result<LoginForm> {
        Ok(self
            .sessions
            .load_remembered()?
            .map(LoginForm::from)
            .unwrap_or_default())
    }

    /// Forgets the remembered values and returns the default form.
    pub fn reset(&self) -> Result<LoginForm> {
        self.sessions.clear_remembered()?;
        Ok(LoginForm::default())
    }

    /// Logs in unconditionally and returns the page to show next.
    ///
    /// Blank company or email fall back to the defaults. Both the remembered
    /// form values and the new session are persisted.
    pub fn login(&self, form: &LoginForm) -> Result<(Session, Page)> {
        let company = non_blank(&form.company, DEFAULT_COMPANY);
        let email = non_blank(&form.email, DEFAULT_EMAIL);
        let department = form.department.clone();

        let remembered = RememberedLogin {
            company: company.clone(),
            email: email.clone(),
            department: department.clone(),
        };
        let session = Session::issue(company, email, department);

        self.sessions.save_remembered(&remembered)?;
        self.sessions.save_session(&session)?;
        tracing::info!(email = %session.email, company = %session.company, "logged in");

        Ok((session, Page::Workspace))
    }
}

fn non_blank(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
