//! # tender-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TENDER_*` prefix, `__` as separator)
//! 2. Project-level `.tender/config.toml`
//! 3. User-level `~/.config/tender/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TENDER_DATABASE__PATH` -> `database.path`,
//! `TENDER_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`.

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tender_core::listing::MAX_LIMIT;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TenderConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TenderConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// `ConfigError::Figment` when a source cannot be parsed,
    /// `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the current directory first, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".tender/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TENDER_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit > MAX_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: format!("must be between 0 and {MAX_LIMIT}"),
            });
        }
        if !self.database.is_remote() && self.database.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty without database.url".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tender").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TenderConfig::default();
        config.validate().unwrap();
        assert!(!config.database.is_remote());
    }

    #[test]
    fn rejects_limit_above_page_maximum() {
        let mut config = TenderConfig::default();
        config.general.default_limit = 51;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.default_limit"));
    }
}
