//! Storage backend abstract Trait

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Key/value blob storage Trait
///
/// The mocked bindings keep their whole collection under a single key,
/// mirroring the browser local-storage shape. Platform implementations:
/// - `MemoryStorage` (default, all platforms)
/// - `FileStorage` (`connector-bridge-app`, one file per key)
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the blob stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(blob))` - the key exists
    /// * `Ok(None)` - the key does not exist
    async fn read(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob
    async fn write(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove the blob stored under `key`
    async fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory storage backend
///
/// Default implementation, available on all platforms.
#[derive(Clone)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new memory storage
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn read(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
