//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the note logic to the host:
//! - `storage` - Vault on disk or in memory
//! - `fetch` - HTTP document download
//! - `notify` - Notices as log events or a recorded list

pub mod fetch;
pub mod notify;
pub mod storage;

pub use fetch::ReqwestPdfFetcher;
pub use notify::{RecordingNotifier, TracingNotifier};
pub use storage::{InMemoryVaultStorage, LocalVaultStorage};
