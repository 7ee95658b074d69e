#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and the `AppState` startup sequence.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use connector_bridge_app::AppStateBuilder;
use connector_bridge_core::config::RuntimeConfig;
use connector_bridge_core::error::{CoreError, CoreResult};
use connector_bridge_core::traits::{
    AccountBinding, BindingRegistry, InMemoryBindingRegistry, MemoryStorage, StorageBackend,
    ACCOUNT_BINDING_KEY,
};
use connector_bridge_core::MockAccountBinding;

/// Storage backend whose every operation fails.
struct BrokenStorage;

#[async_trait]
impl StorageBackend for BrokenStorage {
    async fn read(&self, _key: &str) -> CoreResult<Option<String>> {
        Err(CoreError::StorageError("backend offline".to_string()))
    }

    async fn write(&self, _key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("backend offline".to_string()))
    }

    async fn remove(&self, _key: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("backend offline".to_string()))
    }
}

fn mock_binding() -> Arc<dyn AccountBinding> {
    Arc::new(MockAccountBinding::new(
        Arc::new(MemoryStorage::new()),
        RuntimeConfig::default(),
    ))
}

// ===== AppStateBuilder Tests =====

#[tokio::test]
async fn builder_with_required_binding_succeeds() {
    let result = AppStateBuilder::new().account_binding(mock_binding()).build();
    assert!(result.is_ok());
}

#[tokio::test]
async fn builder_missing_account_binding_fails() {
    let result = AppStateBuilder::new().build();
    assert!(result.is_err());
    match result {
        Err(CoreError::ValidationError(msg)) => assert!(msg.contains("account_binding")),
        Err(other) => panic!("Expected ValidationError, got: {other:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[tokio::test]
async fn builder_default_binding_registry_works() {
    let app_state = AppStateBuilder::new()
        .account_binding(mock_binding())
        .build()
        .unwrap();

    let result = app_state.resolve_binding("nonexistent").await;
    assert!(matches!(result, Err(CoreError::BindingNotFound(_))));
}

#[tokio::test]
async fn builder_custom_binding_registry() {
    let registry = Arc::new(InMemoryBindingRegistry::new());
    let result = AppStateBuilder::new()
        .account_binding(mock_binding())
        .binding_registry(registry)
        .build();
    assert!(result.is_ok());
}

// ===== AppState Startup Tests =====

#[tokio::test]
async fn run_startup_registers_account_binding() {
    let app_state = AppStateBuilder::new()
        .account_binding(mock_binding())
        .build()
        .unwrap();

    assert!(app_state
        .binding_registry
        .get(ACCOUNT_BINDING_KEY)
        .await
        .is_none());

    app_state.run_startup().await;

    let resolved = app_state.resolve_binding(ACCOUNT_BINDING_KEY).await;
    assert!(resolved.is_ok());
    assert_eq!(
        app_state.binding_registry.list_keys().await,
        vec![ACCOUNT_BINDING_KEY.to_string()]
    );
}

#[tokio::test]
async fn startup_completed_flag_set_after_startup() {
    let app_state = AppStateBuilder::new()
        .account_binding(mock_binding())
        .build()
        .unwrap();

    assert!(!app_state.startup_completed.load(Ordering::SeqCst));
    app_state.run_startup().await;
    assert!(app_state.startup_completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn startup_completes_over_broken_storage() {
    // The mocked binding degrades to an empty collection; startup must not fail.
    let binding = Arc::new(MockAccountBinding::new(
        Arc::new(BrokenStorage),
        RuntimeConfig::default(),
    ));
    let app_state = AppStateBuilder::new()
        .account_binding(binding)
        .build()
        .unwrap();

    app_state.run_startup().await;
    assert!(app_state.startup_completed.load(Ordering::SeqCst));

    let resolved = app_state
        .resolve_binding(ACCOUNT_BINDING_KEY)
        .await
        .unwrap();
    let accounts = resolved.get_accounts().await.unwrap();
    assert!(accounts.is_empty());
}
