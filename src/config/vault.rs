//! Vault configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::note::AttachmentFolder;

/// Where notes are written and where the tractate catalog comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultConfig {
    /// Filesystem directory that vault paths are relative to
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// The vault's attachment folder setting (`/`, `./`, `./sub` or a folder)
    #[serde(default = "default_attachment_folder")]
    pub attachment_folder: String,

    /// YAML catalog to use instead of the bundled one
    pub catalog_path: Option<PathBuf>,

    /// Upper bound on a PDF download, in seconds. No limit when unset.
    pub fetch_timeout_secs: Option<u64>,
}

impl VaultConfig {
    pub fn attachment_folder(&self) -> AttachmentFolder {
        AttachmentFolder::parse(&self.attachment_folder)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }

    /// Validate vault configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.root.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("vault.root"));
        }
        if self.fetch_timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            attachment_folder: default_attachment_folder(),
            catalog_path: None,
            fetch_timeout_secs: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_attachment_folder() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_config_defaults() {
        let config = VaultConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.attachment_folder(), AttachmentFolder::VaultRoot);
        assert!(config.catalog_path.is_none());
        assert!(config.fetch_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = VaultConfig {
            fetch_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_empty_root_rejected() {
        let config = VaultConfig {
            root: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("vault.root"))
        );
    }

    #[test]
    fn test_fetch_timeout_in_seconds() {
        let config = VaultConfig {
            fetch_timeout_secs: Some(30),
            ..Default::default()
        };
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(30)));
    }
}
