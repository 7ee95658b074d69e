//! File-backed storage backend.
//!
//! One file per key under a base directory, `std::fs` behind
//! `spawn_blocking`. Same wire contract as `MemoryStorage`, so the mocked
//! bindings can run against real files in desktop and test setups.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use connector_bridge_core::error::{CoreError, CoreResult};
use connector_bridge_core::traits::StorageBackend;

/// File-backed storage backend.
///
/// Each key maps to `<base_dir>/<key>.json`. Blobs are opaque strings; the
/// caller decides what lives inside them.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `base_dir` (created if missing).
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation fails.
    pub fn new(base_dir: &Path) -> CoreResult<Self> {
        std::fs::create_dir_all(base_dir)
            .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
        })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn read_sync(path: &Path) -> CoreResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StorageError(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn write_sync(path: &Path, value: &str) -> CoreResult<()> {
        std::fs::write(path, value.as_bytes()).map_err(|e| {
            CoreError::StorageError(format!("Failed to write {}: {e}", path.display()))
        })
    }

    fn remove_sync(path: &Path) -> CoreResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::StorageError(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[async_trait]
impl StorageBackend for FileStorage {
    async fn read(&self, key: &str) -> CoreResult<Option<String>> {
        let path = self.entry_path(key);
        tokio::task::spawn_blocking(move || Self::read_sync(&path))
            .await
            .map_err(|e| CoreError::StorageError(format!("Task join error: {e}")))?
    }

    async fn write(&self, key: &str, value: &str) -> CoreResult<()> {
        let path = self.entry_path(key);
        let value = value.to_string();
        tokio::task::spawn_blocking(move || Self::write_sync(&path, &value))
            .await
            .map_err(|e| CoreError::StorageError(format!("Task join error: {e}")))??;

        log::debug!("Stored blob under key: {key}");
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        let path = self.entry_path(key);
        tokio::task::spawn_blocking(move || Self::remove_sync(&path))
            .await
            .map_err(|e| CoreError::StorageError(format!("Task join error: {e}")))??;

        log::debug!("Removed blob under key: {key}");
        Ok(())
    }
}
