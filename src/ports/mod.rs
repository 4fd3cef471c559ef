//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the note logic and its host. Adapters implement these ports.
//!
//! - `VaultStorage` - Existence checks, directory creation, text and binary files
//! - `PdfFetcher` - Downloads a binary document by URL
//! - `Notifier` - Transient user-facing notices

mod notifier;
mod pdf_fetcher;
mod vault_storage;

pub use notifier::{Notice, Notifier, ERROR_NOTICE_DURATION};
pub use pdf_fetcher::{FetchError, PdfFetcher};
pub use vault_storage::{normalize_vault_path, StorageError, VaultStorage};
