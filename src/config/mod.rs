//! Application configuration module
//!
//! Configuration is layered with the `config` crate: an optional settings
//! file, then environment variables with the `DAF_YOMI` prefix. Nested values
//! use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use daf_yomi::config::AppConfig;
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Vault at {}", config.vault.root.display());
//! ```

mod error;
mod logging;
mod notes;
mod vault;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use notes::NoteSettings;
pub use vault::VaultConfig;

use serde::Deserialize;
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "DAF_YOMI";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration writing into the current directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Vault location, attachment folder and catalog source
    #[serde(default)]
    pub vault: VaultConfig,

    /// Note layout and provider toggles
    #[serde(default)]
    pub notes: NoteSettings,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads the settings file at `path`, if given (format by extension)
    /// 3. Reads environment variables with `DAF_YOMI` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DAF_YOMI__VAULT__ROOT=/notes` -> `vault.root = /notes`
    /// - `DAF_YOMI__NOTES__SECTIONS=true` -> `notes.sections = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if
    /// values cannot be parsed into expected types.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.vault.validate()?;
        self.notes.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
