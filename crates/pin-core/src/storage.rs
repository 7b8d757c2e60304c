//! Key-value storage abstraction.
//!
//! Every durable piece of state is a JSON blob stored under a fixed string key,
//! the same shape a browser's local storage exposes. Backends live in
//! `pin-infrastructure`.

use crate::error::Result;

/// Storage keys shared by every repository.
pub mod keys {
    /// Authenticated session record. Deleted on logout.
    pub const SESSION: &str = "pin_session";
    /// Remembered login form values.
    pub const REMEMBERED_LOGIN: &str = "pin_demo_login";
    /// Chats, tickets, selection and current view.
    pub const WORKSPACE_STATE: &str = "pin_state_v1";
    /// Admin configuration singleton.
    pub const ADMIN_CONFIG: &str = "pin_admin_config_v1";
    /// Admin audit trail, newest first.
    pub const ADMIN_AUDIT: &str = "pin_admin_audit_v1";
}

/// A string-keyed store of raw string values.
///
/// Values are stored verbatim; callers own serialization. This keeps corrupt
/// or hand-edited blobs representable so that readers can recover from them.
///
/// # Implementation Notes
///
/// - `get` on a missing key returns `Ok(None)`, never an error
/// - `remove` on a missing key succeeds
/// - Concurrent writers to the same key are last-write-wins
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key` if present.
    fn remove(&self, key: &str) -> Result<()>;
}
