//! Account-related type definitions

use serde::{Deserialize, Serialize};

/// One authenticated user/session, as exposed to the frontend.
///
/// An almost 1-1 mapping of what the frontend needs from the host's
/// accounts store. The wire format is camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account id, unique within the stored collection
    pub id: String,
    /// Whether this is the default account (at most one should be, not enforced)
    pub is_default: bool,
    /// Opaque credential token
    pub token: String,
    /// Opaque refresh token
    pub refresh_token: String,
    /// Remote endpoint description
    pub server_info: ServerInfo,
    /// Denormalized profile and usage counters
    pub user_info: UserInfo,
}

/// Remote endpoint description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    /// Display name of the server
    pub name: String,
    /// Server url
    pub url: String,
    /// Whether the server runs the second-generation frontend
    pub frontend2: bool,
}

/// Denormalized user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// User id on the remote server
    pub id: String,
    /// Avatar url (may be empty)
    pub avatar: String,
    /// Account email
    pub email: String,
    /// Display name
    pub name: String,
    /// Commit counter
    pub commits: UsageCount,
    /// Stream counter
    pub streams: UsageCount,
}

/// Wrapped usage counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCount {
    /// Total count reported by the server
    pub total_count: u64,
}
