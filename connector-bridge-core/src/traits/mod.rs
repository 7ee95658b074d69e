//! Binding and storage abstraction trait definitions

mod account_binding;
mod binding_registry;
mod storage_backend;

pub use account_binding::{AccountBinding, ACCOUNT_BINDING_KEY};
pub use binding_registry::{BindingRegistry, InMemoryBindingRegistry};
pub use storage_backend::{MemoryStorage, StorageBackend};
