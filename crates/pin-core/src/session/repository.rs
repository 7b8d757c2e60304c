//! Session repository trait.

use super::model::{RememberedLogin, Session};
use crate::error::Result;

/// Persistence for the login session and the remembered login form.
///
/// Readers treat missing or malformed blobs as absent; only failures of the
/// storage medium itself are returned as errors.
pub trait SessionRepository: Send + Sync {
    /// Returns the persisted session, if any.
    fn load_session(&self) -> Result<Option<Session>>;

    fn save_session(&self, session: &Session) -> Result<()>;

    /// Deletes the persisted session (logout).
    fn clear_session(&self) -> Result<()>;

    fn load_remembered(&self) -> Result<Option<RememberedLogin>>;

    fn save_remembered(&self, remembered: &RememberedLogin) -> Result<()>;

    fn clear_remembered(&self) -> Result<()>;
}
