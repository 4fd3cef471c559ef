//! PDF Fetcher Port - Interface for downloading attachments.

use async_trait::async_trait;

use crate::domain::foundation::ErrorCode;

/// Errors that can occur while fetching a document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("{url} returned status {status}")]
    BadStatus { url: String, status: u16 },

    #[error("Failed to build HTTP client: {0}")]
    ClientSetup(String),
}

impl FetchError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::FetchError
    }
}

/// Port for fetching a binary document by URL
#[async_trait]
pub trait PdfFetcher: Send + Sync {
    /// Download the document at `url`.
    ///
    /// No retries; a failure is returned as-is.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
