//! JSON blob helpers shared by the repositories.

use pin_core::error::Result;
use pin_core::storage::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads and decodes the blob under `key`.
///
/// Missing, empty and `null` blobs are `None`. A blob that fails to decode is
/// logged and also treated as `None`; only storage failures are errors.
pub(crate) fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    let Some(raw) = read_raw(store, key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed stored value");
            Ok(None)
        }
    }
}

/// Reads the raw blob under `key`, treating blank and `null` as absent.
pub(crate) fn read_raw(store: &dyn KeyValueStore, key: &str) -> Result<Option<String>> {
    Ok(store.get(key)?.filter(|raw| {
        let trimmed = raw.trim();
        !trimmed.is_empty() && trimmed != "null"
    }))
}

pub(crate) fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
