//! In-Memory Vault Storage Adapter
//!
//! Keeps files and directories in memory. Useful for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{normalize_vault_path, StorageError, VaultStorage};

/// In-memory vault
///
/// Paths are stored normalized (no leading slash). The root directory always
/// exists. Creating a file requires its parent directory to exist, the same
/// as on disk.
#[derive(Debug, Clone)]
pub struct InMemoryVaultStorage {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    dirs: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryVaultStorage {
    /// Create an empty vault
    pub fn new() -> Self {
        let mut dirs = HashSet::new();
        dirs.insert(String::new());
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
            dirs: Arc::new(RwLock::new(dirs)),
        }
    }

    /// Add a text file, creating its parent directories
    pub async fn insert_file(&self, path: &str, content: &str) {
        if let Ok(key) = normalize_vault_path(path) {
            self.add_dirs(parent_of(&key)).await;
            self.files
                .write()
                .await
                .insert(key, content.as_bytes().to_vec());
        }
    }

    /// Text content of a file, if present
    pub async fn read_text(&self, path: &str) -> Option<String> {
        let key = normalize_vault_path(path).ok()?;
        let files = self.files.read().await;
        files
            .get(&key)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Raw content of a file, if present
    pub async fn read_bytes(&self, path: &str) -> Option<Vec<u8>> {
        let key = normalize_vault_path(path).ok()?;
        self.files.read().await.get(&key).cloned()
    }

    /// Get the number of stored files
    pub async fn file_count(&self) -> usize {
        self.files.read().await.len()
    }

    /// Whether a directory was created
    pub async fn has_dir(&self, path: &str) -> bool {
        match normalize_vault_path(path) {
            Ok(key) => self.dirs.read().await.contains(&key),
            Err(_) => false,
        }
    }

    async fn add_dirs(&self, path: &str) {
        let mut dirs = self.dirs.write().await;
        let mut current = String::new();
        for part in path.split('/').filter(|p| !p.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(part);
            dirs.insert(current.clone());
        }
    }

    async fn create_new(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let key = normalize_vault_path(path)?;
        if !self.dirs.read().await.contains(parent_of(&key)) {
            return Err(StorageError::NotFound(path.to_string()));
        }
        let mut files = self.files.write().await;
        if files.contains_key(&key) {
            return Err(StorageError::AlreadyExists(path.to_string()));
        }
        files.insert(key, bytes.to_vec());
        Ok(())
    }
}

impl Default for InMemoryVaultStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn parent_of(key: &str) -> &str {
    key.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

#[async_trait]
impl VaultStorage for InMemoryVaultStorage {
    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let key = normalize_vault_path(path)?;
        if self.files.read().await.contains_key(&key) {
            return Ok(true);
        }
        Ok(self.dirs.read().await.contains(&key))
    }

    async fn create_dir(&self, path: &str) -> Result<(), StorageError> {
        let key = normalize_vault_path(path)?;
        self.add_dirs(&key).await;
        Ok(())
    }

    async fn create(&self, path: &str, content: &str) -> Result<(), StorageError> {
        self.create_new(path, content.as_bytes()).await
    }

    async fn read(&self, path: &str) -> Result<String, StorageError> {
        self.read_text(path)
            .await
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn write(&self, path: &str, content: &str) -> Result<(), StorageError> {
        let key = normalize_vault_path(path)?;
        let mut files = self.files.write().await;
        match files.get_mut(&key) {
            Some(existing) => {
                *existing = content.as_bytes().to_vec();
                Ok(())
            }
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }

    async fn create_binary(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.create_new(path, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_requires_parent_directory() {
        let storage = InMemoryVaultStorage::new();

        let result = storage.create("/Daf Yomi/Megillah/a.md", "x").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));

        storage.create_dir("/Daf Yomi/Megillah").await.unwrap();
        storage.create("/Daf Yomi/Megillah/a.md", "x").await.unwrap();
        assert_eq!(
            storage.read_text("Daf Yomi/Megillah/a.md").await.as_deref(),
            Some("x")
        );
    }

    #[tokio::test]
    async fn test_create_dir_adds_ancestors() {
        let storage = InMemoryVaultStorage::new();

        storage.create_dir("/a/b/c/").await.unwrap();

        assert!(storage.exists("/a").await.unwrap());
        assert!(storage.exists("/a/b").await.unwrap());
        assert!(storage.has_dir("a/b/c").await);
    }

    #[tokio::test]
    async fn test_create_refuses_to_overwrite() {
        let storage = InMemoryVaultStorage::new();

        storage.create("/a.md", "first").await.unwrap();
        let result = storage.create("/a.md", "second").await;

        assert!(matches!(result, Err(StorageError::AlreadyExists(_))));
        assert_eq!(storage.read("/a.md").await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let storage = InMemoryVaultStorage::new();
        storage.insert_file("/x/index.md", "old").await;

        storage.write("/x/index.md", "new").await.unwrap();

        assert_eq!(storage.read("/x/index.md").await.unwrap(), "new");
        assert!(matches!(
            storage.write("/x/other.md", "new").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_binary_files() {
        let storage = InMemoryVaultStorage::new();

        storage.create_binary("/Megillah_4.pdf", b"%PDF").await.unwrap();

        assert_eq!(
            storage.read_bytes("/Megillah_4.pdf").await,
            Some(b"%PDF".to_vec())
        );
        assert_eq!(storage.file_count().await, 1);
    }

    #[tokio::test]
    async fn test_root_always_exists() {
        let storage = InMemoryVaultStorage::default();
        assert!(storage.exists("/").await.unwrap());
        assert!(!storage.exists("/anything").await.unwrap());
    }
}
