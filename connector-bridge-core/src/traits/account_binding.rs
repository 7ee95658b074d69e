//! Account binding abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Account;

/// Well-known key under which the account binding is resolved by the host.
pub const ACCOUNT_BINDING_KEY: &str = "accountsBinding";

/// Account binding Trait
///
/// Platform implementations:
/// - `MockAccountBinding` (injected storage backend, browser/dev runs)
/// - native credential-store binding (host application, out of tree)
///
/// Selection happens by dependency injection at startup, never by runtime
/// type inspection.
#[async_trait]
pub trait AccountBinding: Send + Sync {
    /// Get all visible accounts
    async fn get_accounts(&self) -> CoreResult<Vec<Account>>;

    /// Save account (new or replacement)
    ///
    /// # Arguments
    /// * `account_id` - id of the record to replace; `account` is appended if absent
    /// * `account` - account data (no consistency check against `account_id`)
    async fn add_account(&self, account_id: &str, account: Account) -> CoreResult<()>;

    /// Remove account
    ///
    /// # Arguments
    /// * `account_id` - Account id; removing an absent id is not an error
    async fn remove_account(&self, account_id: &str) -> CoreResult<()>;

    /// Open the host dev-tools panel, where the platform has one
    async fn show_dev_tools(&self) -> CoreResult<()>;

    /// Open `url` with the platform's url handler
    async fn open_url(&self, url: &str) -> CoreResult<()>;

    /// Subscribe to a binding event
    ///
    /// # Arguments
    /// * `event` - event name
    fn on(&self, event: &str);

    /// Method names this binding advertises to the frontend dispatcher
    fn available_method_names(&self) -> Vec<&'static str> {
        vec!["getAccounts", "addAccount", "removeAccount"]
    }
}
