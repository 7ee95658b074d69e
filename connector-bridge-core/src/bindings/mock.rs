//! Mocked account binding
//!
//! Lets the frontend run without its native host: the account collection
//! lives as one JSON blob in an injected storage backend, and an ephemeral
//! account can be synthesized from runtime configuration. The blob is a
//! throwaway cache, not a source of truth — storage failures degrade to
//! "no data" instead of surfacing to callers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::RuntimeConfig;
use crate::error::CoreResult;
use crate::traits::{AccountBinding, StorageBackend};
use crate::types::{Account, ServerInfo, UsageCount, UserInfo};

/// Storage key holding the serialized account array
pub const ACCOUNTS_STORAGE_KEY: &str = "mock-accounts";

/// Id of the account synthesized from runtime configuration
pub const ENV_ACCOUNT_ID: &str = "env-account";

/// Mocked account binding
///
/// Each call reads the entire collection, mutates it in memory, and writes it
/// back as a single blob. Overlapping calls from different tasks are
/// last-write-wins; the mock makes no attempt to coordinate them.
pub struct MockAccountBinding {
    storage: Arc<dyn StorageBackend>,
    config: RuntimeConfig,
}

impl MockAccountBinding {
    /// Create a mocked binding over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>, config: RuntimeConfig) -> Self {
        Self { storage, config }
    }

    /// Read the persisted collection. Unreadable or corrupt storage is
    /// treated as empty, logged as a warning.
    async fn stored_accounts(&self) -> Vec<Account> {
        match self.storage.read(ACCOUNTS_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(accounts) => accounts,
                Err(e) => {
                    log::warn!("Failed to parse stored accounts, treating as empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load accounts from storage: {e}");
                Vec::new()
            }
        }
    }

    /// Write the collection back. Failures are logged and dropped.
    async fn save_accounts(&self, accounts: &[Account]) {
        let json = match serde_json::to_string(accounts) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize accounts: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(ACCOUNTS_STORAGE_KEY, &json).await {
            log::warn!("Failed to save accounts to storage: {e}");
        }
    }

    /// Fixed-shape account derived from runtime configuration.
    fn env_account(token: &str, url: &str, is_default: bool) -> Account {
        Account {
            id: ENV_ACCOUNT_ID.to_string(),
            is_default,
            token: token.to_string(),
            refresh_token: String::new(),
            server_info: ServerInfo {
                name: "Env Server".to_string(),
                url: url.to_string(),
                frontend2: true,
            },
            user_info: UserInfo {
                id: "env-user".to_string(),
                avatar: String::new(),
                email: "env@connector.local".to_string(),
                name: "Env User".to_string(),
                commits: UsageCount { total_count: 0 },
                streams: UsageCount { total_count: 0 },
            },
        }
    }
}

#[async_trait]
impl AccountBinding for MockAccountBinding {
    async fn get_accounts(&self) -> CoreResult<Vec<Account>> {
        let mut accounts = self.stored_accounts().await;

        if let (Some(token), Some(url)) = (&self.config.token, &self.config.server_url) {
            // The synthetic record only exists in the returned collection;
            // it is never written back to storage.
            if !accounts.iter().any(|a| a.id == ENV_ACCOUNT_ID) {
                let is_default = accounts.is_empty();
                accounts.insert(0, Self::env_account(token, url, is_default));
            }
        }

        Ok(accounts)
    }

    async fn add_account(&self, account_id: &str, account: Account) -> CoreResult<()> {
        let mut accounts = self.stored_accounts().await;

        if let Some(existing) = accounts.iter_mut().find(|a| a.id == account_id) {
            *existing = account;
        } else {
            accounts.push(account);
        }

        self.save_accounts(&accounts).await;
        Ok(())
    }

    async fn remove_account(&self, account_id: &str) -> CoreResult<()> {
        let mut accounts = self.stored_accounts().await;
        accounts.retain(|a| a.id != account_id);
        self.save_accounts(&accounts).await;
        Ok(())
    }

    async fn show_dev_tools(&self) -> CoreResult<()> {
        log::info!("DevTools are not available in the mocked binding");
        Ok(())
    }

    async fn open_url(&self, url: &str) -> CoreResult<()> {
        log::info!("Mocked binding asked to open url: {url}");
        Ok(())
    }

    fn on(&self, event: &str) {
        log::debug!("Ignoring subscription to '{event}' on the mocked binding");
    }
}
