//! Core type definitions

mod account;

pub use account::{Account, ServerInfo, UsageCount, UserInfo};
