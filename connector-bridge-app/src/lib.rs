//! Platform-agnostic application bootstrap for Connector Bridge.
//!
//! Provides `AppState` (binding container) and `AppStateBuilder` (adapter
//! injection). Every frontend constructs this once at startup, then resolves
//! bindings from the registry by their well-known keys.

pub mod adapters;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use connector_bridge_core::error::{CoreError, CoreResult};
use connector_bridge_core::traits::{
    AccountBinding, BindingRegistry, InMemoryBindingRegistry, ACCOUNT_BINDING_KEY,
};

/// Platform-agnostic application state.
///
/// Holds the binding registry and the injected bindings. The concrete
/// account binding (mocked or native) is chosen by the platform layer at
/// construction time.
pub struct AppState {
    /// Binding registry (lookup by well-known key)
    pub binding_registry: Arc<dyn BindingRegistry>,
    /// Account binding
    pub account_binding: Arc<dyn AccountBinding>,
    /// Whether startup registration has completed
    pub startup_completed: AtomicBool,
}

impl AppState {
    /// Run the startup sequence: publish bindings, then warm the account list.
    ///
    /// Never fails observably; a degraded storage backend only shrinks the
    /// reported account count.
    pub async fn run_startup(&self) {
        self.binding_registry
            .register(
                ACCOUNT_BINDING_KEY.to_string(),
                Arc::clone(&self.account_binding),
            )
            .await;

        match self.account_binding.get_accounts().await {
            Ok(accounts) => {
                log::info!("Account binding ready: {} account(s) visible", accounts.len());
            }
            Err(e) => {
                log::warn!("Account binding failed to list accounts at startup: {e}");
            }
        }

        self.startup_completed.store(true, Ordering::SeqCst);
    }

    /// Resolve a binding by its well-known key.
    pub async fn resolve_binding(&self, key: &str) -> CoreResult<Arc<dyn AccountBinding>> {
        self.binding_registry
            .get(key)
            .await
            .ok_or_else(|| CoreError::BindingNotFound(key.to_string()))
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `account_binding` — which account binding backs the frontend
///
/// # Optional
/// - `binding_registry` — defaults to `InMemoryBindingRegistry`
pub struct AppStateBuilder {
    account_binding: Option<Arc<dyn AccountBinding>>,
    binding_registry: Option<Arc<dyn BindingRegistry>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            account_binding: None,
            binding_registry: None,
        }
    }

    #[must_use]
    pub fn account_binding(mut self, binding: Arc<dyn AccountBinding>) -> Self {
        self.account_binding = Some(binding);
        self
    }

    #[must_use]
    pub fn binding_registry(mut self, registry: Arc<dyn BindingRegistry>) -> Self {
        self.binding_registry = Some(registry);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let account_binding = self.account_binding.ok_or_else(|| {
            CoreError::ValidationError("account_binding is required".to_string())
        })?;
        let binding_registry = self
            .binding_registry
            .unwrap_or_else(|| Arc::new(InMemoryBindingRegistry::new()));

        Ok(AppState {
            binding_registry,
            account_binding,
            startup_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
