#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `FileStorage` and the mocked binding over real files.

use std::sync::Arc;

use connector_bridge_app::adapters::FileStorage;
use connector_bridge_core::bindings::ACCOUNTS_STORAGE_KEY;
use connector_bridge_core::config::RuntimeConfig;
use connector_bridge_core::traits::{AccountBinding, StorageBackend};
use connector_bridge_core::types::{Account, ServerInfo, UsageCount, UserInfo};
use connector_bridge_core::MockAccountBinding;

fn create_test_file_storage() -> (Arc<FileStorage>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let storage = FileStorage::new(tmp.path()).expect("failed to create FileStorage");
    (Arc::new(storage), tmp)
}

fn make_account(id: &str) -> Account {
    Account {
        id: id.to_string(),
        is_default: false,
        token: "tok".to_string(),
        refresh_token: String::new(),
        server_info: ServerInfo {
            name: "Server".to_string(),
            url: "https://server.test".to_string(),
            frontend2: true,
        },
        user_info: UserInfo {
            id: format!("user-{id}"),
            avatar: String::new(),
            email: format!("{id}@server.test"),
            name: "User".to_string(),
            commits: UsageCount { total_count: 0 },
            streams: UsageCount { total_count: 0 },
        },
    }
}

// ===== FileStorage Tests =====

#[tokio::test]
async fn write_then_read_round_trip() {
    let (storage, _tmp) = create_test_file_storage();

    storage.write("some-key", "payload").await.unwrap();
    let read = storage.read("some-key").await.unwrap();
    assert_eq!(read.as_deref(), Some("payload"));
}

#[tokio::test]
async fn read_missing_key_returns_none() {
    let (storage, _tmp) = create_test_file_storage();
    assert!(storage.read("absent").await.unwrap().is_none());
}

#[tokio::test]
async fn write_replaces_previous_blob() {
    let (storage, _tmp) = create_test_file_storage();

    storage.write("some-key", "first").await.unwrap();
    storage.write("some-key", "second").await.unwrap();

    assert_eq!(
        storage.read("some-key").await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn remove_deletes_entry() {
    let (storage, _tmp) = create_test_file_storage();

    storage.write("some-key", "payload").await.unwrap();
    storage.remove("some-key").await.unwrap();

    assert!(storage.read("some-key").await.unwrap().is_none());
}

#[tokio::test]
async fn remove_missing_key_is_ok() {
    let (storage, _tmp) = create_test_file_storage();
    assert!(storage.remove("absent").await.is_ok());
}

#[tokio::test]
async fn new_creates_base_directory() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let nested = tmp.path().join("nested").join("deep");

    let result = FileStorage::new(&nested);
    assert!(result.is_ok());
    assert!(nested.exists());
}

#[tokio::test]
async fn reopen_existing_directory_sees_data() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");

    {
        let storage = FileStorage::new(tmp.path()).unwrap();
        storage.write("some-key", "persisted").await.unwrap();
    }

    let storage = FileStorage::new(tmp.path()).unwrap();
    assert_eq!(
        storage.read("some-key").await.unwrap().as_deref(),
        Some("persisted")
    );
}

// ===== Mocked binding over FileStorage =====

#[tokio::test]
async fn mock_binding_persists_accounts_to_disk() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");

    // Create and populate
    {
        let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
        let binding = MockAccountBinding::new(storage, RuntimeConfig::default());
        binding
            .add_account("acc-1", make_account("acc-1"))
            .await
            .unwrap();
    }

    // The persisted blob is a plain JSON array of accounts
    let blob_path = tmp.path().join(format!("{ACCOUNTS_STORAGE_KEY}.json"));
    let raw = std::fs::read_to_string(&blob_path).unwrap();
    let persisted: Vec<Account> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, "acc-1");

    // Reopen and verify through the binding
    let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
    let binding = MockAccountBinding::new(storage, RuntimeConfig::default());
    let accounts = binding.get_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, "acc-1");
}

#[tokio::test]
async fn mock_binding_treats_corrupt_file_as_empty() {
    let (storage, tmp) = create_test_file_storage();

    let blob_path = tmp.path().join(format!("{ACCOUNTS_STORAGE_KEY}.json"));
    std::fs::write(&blob_path, "not valid json!!!").unwrap();

    let binding = MockAccountBinding::new(storage, RuntimeConfig::default());
    let accounts = binding.get_accounts().await.unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn mock_binding_env_account_not_written_to_disk() {
    let (storage, tmp) = create_test_file_storage();

    let config = RuntimeConfig::new(
        Some("tok".to_string()),
        Some("https://example.com".to_string()),
    );
    let binding = MockAccountBinding::new(storage, config);

    let accounts = binding.get_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, "env-account");

    let blob_path = tmp.path().join(format!("{ACCOUNTS_STORAGE_KEY}.json"));
    assert!(!blob_path.exists());
}
