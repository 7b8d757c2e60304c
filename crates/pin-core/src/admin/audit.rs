//! Admin audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use strum::{AsRefStr, Display, EnumString};

/// Maximum number of entries kept in the audit log.
pub const AUDIT_CAPACITY: usize = 50;

/// Kinds of administrative change that are audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AuditAction {
    UpdateLlm,
    UpdateRag,
    UpdateFlows,
}

/// A record of one administrative configuration change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub ts: DateTime<Utc>,
    pub actor: String,
    /// Action name; kept as a string so entries written by other versions load.
    pub action: String,
    /// Redacted snapshot of the saved values.
    #[serde(default)]
    pub detail: JsonValue,
}

impl AuditEntry {
    pub fn new(actor: impl Into<String>, action: AuditAction, detail: JsonValue) -> Self {
        Self {
            ts: Utc::now(),
            actor: actor.into(),
            action: action.to_string(),
            detail,
        }
    }
}

/// Newest-first audit log holding at most [`AUDIT_CAPACITY`] entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<AuditEntry>", into = "Vec<AuditEntry>")]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from stored entries (newest first), dropping any beyond
    /// capacity.
    pub fn from_entries(mut entries: Vec<AuditEntry>) -> Self {
        entries.truncate(AUDIT_CAPACITY);
        Self { entries }
    }

    /// Prepends `entry`, evicting the oldest entries beyond capacity.
    pub fn record(&mut self, entry: AuditEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(AUDIT_CAPACITY);
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<AuditEntry>> for AuditLog {
    fn from(entries: Vec<AuditEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<AuditLog> for Vec<AuditEntry> {
    fn from(log: AuditLog) -> Self {
        log.entries
    }
}
