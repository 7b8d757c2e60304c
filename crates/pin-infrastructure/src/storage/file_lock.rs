//! Per-key advisory write lock.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use pin_core::error::{PinError, Result};

/// Exclusive lock on `<key>.lock`, released when dropped.
///
/// The lock file is never deleted. Removing it on release would let a waiter
/// lock an unlinked inode while a newcomer locks a fresh one, and both would
/// believe they hold the lock.
pub(super) struct KeyLock {
    file: File,
    path: PathBuf,
}

impl KeyLock {
    /// Blocks until the lock for the blob at `blob_path` is held.
    pub(super) fn acquire(blob_path: &Path) -> Result<Self> {
        let path = blob_path.with_extension("lock");
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        FileExt::lock_exclusive(&file).map_err(|e| {
            PinError::io(format!("Failed to lock {}: {e}", path.display()))
        })?;
        Ok(Self { file, path })
    }
}

impl Drop for KeyLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release store lock");
        }
    }
}
