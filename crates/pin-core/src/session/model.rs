//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Company used when the login form is left blank.
pub const DEFAULT_COMPANY: &str = "ACME";
/// Email used when the login form is left blank.
pub const DEFAULT_EMAIL: &str = "jane.doe@acme.com";
/// Department preselected on the login form.
pub const DEFAULT_DEPARTMENT: &str = "IT";

/// The locally persisted record asserting a user is logged in.
///
/// There is no expiry: a session lives until logout deletes it. Any session
/// with `is_authenticated` set may reach every page, including admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub company: String,
    pub email: String,
    #[serde(rename = "dept", alias = "department")]
    pub department: String,
    pub is_authenticated: bool,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Fabricates an authenticated session issued now.
    pub fn issue(
        company: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            email: email.into(),
            department: department.into(),
            is_authenticated: true,
            issued_at: Utc::now(),
        }
    }
}

/// Values the login form is pre-filled from on the next visit.
///
/// Every field is optional on disk; missing ones fall back to the defaults
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedLogin {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "dept", alias = "department")]
    pub department: String,
}

impl RememberedLogin {
    /// Returns a copy with blank fields replaced by the defaults.
    pub fn or_defaults(&self) -> Self {
        fn pick(value: &str, default: &str) -> String {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        }

        Self {
            company: pick(&self.company, DEFAULT_COMPANY),
            email: pick(&self.email, DEFAULT_EMAIL),
            department: pick(&self.department, DEFAULT_DEPARTMENT),
        }
    }
}

impl Default for RememberedLogin {
    fn default() -> Self {
        Self {
            company: DEFAULT_COMPANY.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
        }
    }
}
