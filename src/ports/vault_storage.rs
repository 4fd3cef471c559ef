//! Vault Storage Port - Interface for reading and writing notes.
//!
//! Paths are slash-separated and relative to the vault root. A leading `/`
//! is allowed and means the same thing as no leading slash.

use async_trait::async_trait;

use crate::domain::foundation::ErrorCode;

/// Errors that can occur during vault storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid vault path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl StorageError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageError
    }
}

/// Port for the note vault.
///
/// # Contract
///
/// - `exists` is safe to call speculatively and never creates anything.
/// - `create` and `create_binary` refuse to overwrite (`AlreadyExists`).
/// - `create_dir` creates missing parents and succeeds if the directory exists.
/// - `write` replaces the content of an existing file.
#[async_trait]
pub trait VaultStorage: Send + Sync {
    /// Check whether a file or directory exists
    async fn exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Create a directory and any missing parents
    async fn create_dir(&self, path: &str) -> Result<(), StorageError>;

    /// Create a new text file
    ///
    /// # Errors
    /// Returns `StorageError::AlreadyExists` if the file exists
    async fn create(&self, path: &str, content: &str) -> Result<(), StorageError>;

    /// Read a text file
    ///
    /// # Errors
    /// Returns `StorageError::NotFound` if the file doesn't exist
    async fn read(&self, path: &str) -> Result<String, StorageError>;

    /// Replace the content of a text file
    async fn write(&self, path: &str, content: &str) -> Result<(), StorageError>;

    /// Create a new binary file
    ///
    /// # Errors
    /// Returns `StorageError::AlreadyExists` if the file exists
    async fn create_binary(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Normalizes a vault path: drops leading, trailing and doubled slashes.
///
/// Rejects `..` components so a path can never leave the vault.
pub fn normalize_vault_path(path: &str) -> Result<String, StorageError> {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty() && *p != ".").collect();
    if parts.iter().any(|p| *p == "..") {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_not_found() {
        let err = StorageError::NotFound("a/b.md".to_string());
        assert!(err.to_string().contains("not found"));
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[test]
    fn test_normalize_strips_slashes() {
        assert_eq!(
            normalize_vault_path("/Daf Yomi//Megillah/").unwrap(),
            "Daf Yomi/Megillah"
        );
        assert_eq!(normalize_vault_path("/x.pdf").unwrap(), "x.pdf");
        assert_eq!(normalize_vault_path("./a/./b").unwrap(), "a/b");
        assert_eq!(normalize_vault_path("/").unwrap(), "");
    }

    #[test]
    fn test_normalize_rejects_parent_components() {
        assert!(matches!(
            normalize_vault_path("/a/../../etc"),
            Err(StorageError::InvalidPath(_))
        ));
    }
}
