//! Directory-backed key-value store.
//!
//! Each key is one `<key>.json` file guarded by a persistent `<key>.lock`.
//! Every write goes to its own temp file in the same directory and is renamed
//! into place while the lock is held, so readers never observe a half-written
//! blob.

use std::fs;
use std::io::Write as IoWrite;
use std::path::PathBuf;

use pin_core::error::{PinError, Result};
use pin_core::storage::KeyValueStore;
use tempfile::NamedTempFile;

use super::file_lock::KeyLock;

/// A [`KeyValueStore`] persisting each key as a JSON file in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "opened json file store");
        Ok(Self { root })
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(PinError::validation(
            "key",
            format!("'{key}' may only contain ASCII letters, digits, '_' and '-'"),
        ))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _lock = KeyLock::acquire(&path)?;

        let mut tmp_file = NamedTempFile::new_in(&self.root)?;
        tmp_file.write_all(value.as_bytes())?;
        tmp_file.as_file().sync_all()?;
        tmp_file.persist(&path).map_err(|e| PinError::from(e.error))?;
        tracing::trace!(key, bytes = value.len(), "stored blob");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _lock = KeyLock::acquire(&path)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::trace!(key, "removed blob");
        }
        Ok(())
    }
}
