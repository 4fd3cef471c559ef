//! Local Vault Storage Adapter
//!
//! Stores notes and attachments as plain files below a root directory.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{normalize_vault_path, StorageError, VaultStorage};

/// File-based vault rooted at a local directory
#[derive(Debug, Clone)]
pub struct LocalVaultStorage {
    root: PathBuf,
}

impl LocalVaultStorage {
    /// Create a vault over an existing directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = LocalVaultStorage::new("/home/me/Notes");
    /// ```
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Map a vault path onto the filesystem
    fn full_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = normalize_vault_path(path)?;
        Ok(relative
            .split('/')
            .filter(|p| !p.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part)))
    }

    async fn create_new(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let full_path = self.full_path(path)?;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .await
            .map_err(|e| map_io_error(path, e))?;
        file.write_all(bytes)
            .await
            .map_err(|e| map_io_error(path, e))?;
        file.flush().await.map_err(|e| map_io_error(path, e))
    }
}

fn map_io_error(path: &str, err: io::Error) -> StorageError {
    match err.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound(path.to_string()),
        io::ErrorKind::AlreadyExists => StorageError::AlreadyExists(path.to_string()),
        _ => StorageError::IoError(format!("{path}: {err}")),
    }
}

#[async_trait]
impl VaultStorage for LocalVaultStorage {
    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.full_path(path)?;
        match fs::metadata(&full_path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(map_io_error(path, e)),
        }
    }

    async fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        let full_path = self.full_path(path)?;
        fs::create_dir_all(&full_path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn create(&self, path: &str, content: &str) -> Result<(), StorageError> {
        self.create_new(path, content.as_bytes()).await
    }

    async fn read(&self, path: &str) -> Result<String, StorageError> {
        let full_path = self.full_path(path)?;
        fs::read_to_string(&full_path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn write(&self, path: &str, content: &str) -> Result<(), StorageError> {
        let full_path = self.full_path(path)?;
        let metadata = fs::metadata(&full_path)
            .await
            .map_err(|e| map_io_error(path, e))?;
        if !metadata.is_file() {
            return Err(StorageError::NotFound(path.to_string()));
        }
        fs::write(&full_path, content)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn create_binary(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.create_new(path, bytes).await
    }
}
