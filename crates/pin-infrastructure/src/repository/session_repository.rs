//! Session repository over a key-value store.

use std::sync::Arc;

use pin_core::error::Result;
use pin_core::session::{RememberedLogin, Session, SessionRepository};
use pin_core::storage::{KeyValueStore, keys};

use super::blob::{read_json, write_json};

/// Stores the session under `pin_session` and the remembered login form
/// under `pin_demo_login`.
#[derive(Clone)]
pub struct StoreSessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SessionRepository for StoreSessionRepository {
    fn load_session(&self) -> Result<Option<Session>> {
        read_json(self.store.as_ref(), keys::SESSION)
    }

    fn save_session(&self, session: &Session) -> Result<()> {
        write_json(self.store.as_ref(), keys::SESSION, session)
    }

    fn clear_session(&self) -> Result<()> {
        self.store.remove(keys::SESSION)
    }

    fn load_remembered(&self) -> Result<Option<RememberedLogin>> {
        read_json(self.store.as_ref(), keys::REMEMBERED_LOGIN)
    }

    fn save_remembered(&self, remembered: &RememberedLogin) -> Result<()> {
        write_json(self.store.as_ref(), keys::REMEMBERED_LOGIN, remembered)
    }

    fn clear_remembered(&self) -> Result<()> {
        self.store.remove(keys::REMEMBERED_LOGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn repository() -> (MemoryStore, StoreSessionRepository) {
        let store = MemoryStore::new();
        let repo = StoreSessionRepository::new(Arc::new(store.clone()));
        (store, repo)
    }

    #[test]
    fn test_session_round_trip_and_clear() {
        let (_store, repo) = repository();
        assert!(repo.load_session().unwrap().is_none());

        let session = Session::issue("ACME", "a@acme.com", "IT");
        repo.save_session(&session).unwrap();
        assert_eq!(repo.load_session().unwrap(), Some(session));

        repo.clear_session().unwrap();
        assert!(repo.load_session().unwrap().is_none());
    }

    #[test]
    fn test_malformed_session_reads_as_absent() {
        let (store, repo) = repository();
        store.set(keys::SESSION, "{\"company\": ").unwrap();
        assert!(repo.load_session().unwrap().is_none());

        store.set(keys::SESSION, "null").unwrap();
        assert!(repo.load_session().unwrap().is_none());
    }

    #[test]
    fn test_remembered_login_uses_dept_key() {
        let (store, repo) = repository();
        repo.save_remembered(&RememberedLogin::default()).unwrap();
        let raw = store.get(keys::REMEMBERED_LOGIN).unwrap().unwrap();
        assert!(raw.contains("\"dept\":\"IT\""));

        repo.clear_remembered().unwrap();
        assert!(repo.load_remembered().unwrap().is_none());
    }
}
