//! Test helper module
//!
//! Provides a fault-injecting storage backend and convenient factory methods.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::bindings::MockAccountBinding;
use crate::config::RuntimeConfig;
use crate::error::{CoreError, CoreResult};
use crate::traits::StorageBackend;
use crate::types::{Account, ServerInfo, UsageCount, UserInfo};

// ===== MockStorage =====

pub struct MockStorage {
    entries: RwLock<HashMap<String, String>>,
    /// If Some, read returns this error (exercises the degraded-read path)
    read_error: RwLock<Option<String>>,
    /// If Some, write returns this error (exercises the dropped-write path)
    write_error: RwLock<Option<String>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            read_error: RwLock::new(None),
            write_error: RwLock::new(None),
        }
    }

    pub async fn set_read_error(&self, err: Option<String>) {
        *self.read_error.write().await = err;
    }

    pub async fn set_write_error(&self, err: Option<String>) {
        *self.write_error.write().await = err;
    }

    /// Inspect the persisted blob without going through the binding.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Seed a blob directly (e.g. corrupt data).
    pub async fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl StorageBackend for MockStorage {
    async fn read(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.read_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.write_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.write_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.entries.write().await.remove(key);
        Ok(())
    }
}

// ===== Factory methods =====

/// Create a mocked binding with no runtime configuration.
pub fn create_mock_binding() -> (MockAccountBinding, Arc<MockStorage>) {
    create_mock_binding_with_config(RuntimeConfig::default())
}

/// Create a mocked binding over a fresh `MockStorage`.
pub fn create_mock_binding_with_config(
    config: RuntimeConfig,
) -> (MockAccountBinding, Arc<MockStorage>) {
    let storage = Arc::new(MockStorage::new());
    let binding = MockAccountBinding::new(storage.clone(), config);
    (binding, storage)
}

/// Create an `Account` for testing.
pub fn test_account(id: &str) -> Account {
    Account {
        id: id.to_string(),
        is_default: false,
        token: format!("token-{id}"),
        refresh_token: format!("refresh-{id}"),
        server_info: ServerInfo {
            name: "Test Server".to_string(),
            url: "https://server.test".to_string(),
            frontend2: false,
        },
        user_info: UserInfo {
            id: format!("user-{id}"),
            avatar: String::new(),
            email: format!("{id}@server.test"),
            name: "Test User".to_string(),
            commits: UsageCount { total_count: 0 },
            streams: UsageCount { total_count: 0 },
        },
    }
}
