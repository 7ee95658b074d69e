//! Binding registry abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::traits::AccountBinding;

/// Binding registry Trait
///
/// Manages the bindings exposed to the frontend, indexed by their well-known
/// key (e.g. `ACCOUNT_BINDING_KEY`). Provides a default memory implementation
/// `InMemoryBindingRegistry`.
#[async_trait]
pub trait BindingRegistry: Send + Sync {
    /// Register a binding instance
    ///
    /// # Arguments
    /// * `key` - well-known lookup key
    /// * `binding` - binding instance
    async fn register(&self, key: String, binding: Arc<dyn AccountBinding>);

    /// Unregister a binding
    ///
    /// # Arguments
    /// * `key` - well-known lookup key
    async fn unregister(&self, key: &str);

    /// Get a binding instance
    ///
    /// # Arguments
    /// * `key` - well-known lookup key
    async fn get(&self, key: &str) -> Option<Arc<dyn AccountBinding>>;

    /// List all registered keys
    async fn list_keys(&self) -> Vec<String>;
}

/// In-memory binding registry
///
/// Default implementation, available on all platforms.
#[derive(Clone)]
pub struct InMemoryBindingRegistry {
    bindings: Arc<RwLock<HashMap<String, Arc<dyn AccountBinding>>>>,
}

impl InMemoryBindingRegistry {
    /// Create a new memory registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryBindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BindingRegistry for InMemoryBindingRegistry {
    async fn register(&self, key: String, binding: Arc<dyn AccountBinding>) {
        self.bindings.write().await.insert(key, binding);
    }

    async fn unregister(&self, key: &str) {
        self.bindings.write().await.remove(key);
    }

    async fn get(&self, key: &str) -> Option<Arc<dyn AccountBinding>> {
        self.bindings.read().await.get(key).cloned()
    }

    async fn list_keys(&self) -> Vec<String> {
        self.bindings.read().await.keys().cloned().collect()
    }
}
