//! Storage Adapters
//!
//! Implementations of the VaultStorage port.
//!
//! ## Available Adapters
//!
//! - **LocalVaultStorage** - Plain files below a root directory
//! - **InMemoryVaultStorage** - Files kept in memory (testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryVaultStorage, LocalVaultStorage};
//!
//! // Production: a vault on disk
//! let storage = LocalVaultStorage::new("/home/me/Notes");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryVaultStorage::new();
//! ```

mod in_memory_vault_storage;
mod local_vault_storage;

pub use in_memory_vault_storage::InMemoryVaultStorage;
pub use local_vault_storage::LocalVaultStorage;
