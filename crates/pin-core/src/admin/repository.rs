//! Admin configuration repository trait.

use super::audit::AuditLog;
use super::config::AdminConfig;
use crate::error::Result;

/// Persistence for the admin configuration and its audit trail.
pub trait AdminConfigRepository: Send + Sync {
    /// Loads the configuration merged over defaults. Never fails on bad data.
    fn load_config(&self) -> Result<AdminConfig>;

    /// Overwrites the whole configuration object.
    fn save_config(&self, config: &AdminConfig) -> Result<()>;

    /// Loads the audit log, newest first. Bad data loads as an empty log.
    fn load_audit(&self) -> Result<AuditLog>;

    fn save_audit(&self, log: &AuditLog) -> Result<()>;
}
