//! # hoard-config
//!
//! Layered configuration loading for hoard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HOARD_*` prefix, `__` as separator)
//! 2. Project-level `.hoard/config.toml`
//! 3. User-level `~/.config/hoard/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HOARD_SCRAPE__DELAY_SECS` -> `scrape.delay_secs`,
//! `HOARD_CATALOG__ROOT` -> `catalog.root`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hoard_config::HoardConfig;
//!
//! let config = HoardConfig::load_with_dotenv().expect("config");
//! for file in config.catalog.resolved_files() {
//!     println!("{}", file.display());
//! }
//! ```

mod catalog;
mod error;
mod scrape;

pub use catalog::{CatalogConfig, DEFAULT_FILES};
pub use error::ConfigError;
pub use scrape::{DEFAULT_USER_AGENT, ScrapeConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HoardConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
}

impl HoardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`HoardConfig::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`HoardConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure and
    /// [`ConfigError::InvalidValue`] if validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.scrape.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".hoard/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HOARD_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hoard").join("config.toml"))
    }
}
