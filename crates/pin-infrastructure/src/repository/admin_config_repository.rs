//! Admin configuration repository over a key-value store.

use std::sync::Arc;

use pin_core::admin::{AdminConfig, AdminConfigRepository, AuditLog};
use pin_core::error::Result;
use pin_core::storage::{KeyValueStore, keys};

use super::blob::{read_json, read_raw, write_json};

/// Stores the configuration under `pin_admin_config_v1` and the audit log
/// under `pin_admin_audit_v1`.
#[derive(Clone)]
pub struct StoreAdminConfigRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreAdminConfigRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl AdminConfigRepository for StoreAdminConfigRepository {
    fn load_config(&self) -> Result<AdminConfig> {
        let Some(raw) = read_raw(self.store.as_ref(), keys::ADMIN_CONFIG)? else {
            return Ok(AdminConfig::default());
        };

        Ok(AdminConfig::merge_over_defaults(&raw).unwrap_or_else(|| {
            tracing::warn!(
                key = keys::ADMIN_CONFIG,
                "stored admin config unreadable, using defaults"
            );
            AdminConfig::default()
        }))
    }

    fn save_config(&self, config: &AdminConfig) -> Result<()> {
        write_json(self.store.as_ref(), keys::ADMIN_CONFIG, config)
    }

    fn load_audit(&self) -> Result<AuditLog> {
        Ok(read_json(self.store.as_ref(), keys::ADMIN_AUDIT)?.unwrap_or_default())
    }

    fn save_audit(&self, log: &AuditLog) -> Result<()> {
        write_json(self.store.as_ref(), keys::ADMIN_AUDIT, log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pin_core::admin::{AUDIT_CAPACITY, AuditAction, AuditEntry, LlmProvider};
    use serde_json::json;

    fn repository() -> (MemoryStore, StoreAdminConfigRepository) {
        let store = MemoryStore::new();
        let repo = StoreAdminConfigRepository::new(Arc::new(store.clone()));
        (store, repo)
    }

    #[test]
    fn test_missing_config_loads_defaults() {
        let (_store, repo) = repository();
        assert_eq!(repo.load_config().unwrap(), AdminConfig::default());
    }

    #[test]
    fn test_corrupt_config_loads_defaults() {
        let (store, repo) = repository();
        store.set(keys::ADMIN_CONFIG, "{{{{").unwrap();
        assert_eq!(repo.load_config().unwrap(), AdminConfig::default());
    }

    #[test]
    fn test_partial_config_self_heals() {
        let (store, repo) = repository();
        store
            .set(keys::ADMIN_CONFIG, r#"{"llm": {"provider": "openai_compat"}}"#)
            .unwrap();

        let config = repo.load_config().unwrap();
        assert_eq!(config.llm.provider, LlmProvider::OpenaiCompat);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.rag.top_k, 4);
        assert_eq!(config.flows.max_turns_before_escalate, 8);
    }

    #[test]
    fn test_load_twice_is_identical() {
        let (store, repo) = repository();
        store.set(keys::ADMIN_CONFIG, r#"{"rag": {"minScore": 0.4}}"#).unwrap();
        assert_eq!(repo.load_config().unwrap(), repo.load_config().unwrap());
    }

    #[test]
    fn test_audit_round_trip_is_bounded() {
        let (store, repo) = repository();
        let entries: Vec<AuditEntry> = (0..(AUDIT_CAPACITY + 10))
            .map(|n| AuditEntry::new("a@acme.com", AuditAction::UpdateFlows, json!({ "n": n })))
            .collect();
        store
            .set(keys::ADMIN_AUDIT, &serde_json::to_string(&entries).unwrap())
            .unwrap();

        let log = repo.load_audit().unwrap();
        assert_eq!(log.len(), AUDIT_CAPACITY);

        repo.save_audit(&log).unwrap();
        assert_eq!(repo.load_audit().unwrap(), log);
    }
}
