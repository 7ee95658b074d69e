//! Binding implementations

mod mock;

pub use mock::{MockAccountBinding, ACCOUNTS_STORAGE_KEY, ENV_ACCOUNT_ID};
