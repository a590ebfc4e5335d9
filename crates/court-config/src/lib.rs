//! # court-config
//!
//! Layered configuration loading for courtside using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COURT_*` prefix, `__` as separator)
//! 2. An explicit file passed on the command line
//! 3. Project-level `.courtside/config.toml`
//! 4. User-level `~/.config/courtside/config.toml`
//! 5. Built-in defaults
//!
//! Figment maps `COURT_SERVER__PORT` -> `server.port`,
//! `COURT_DATABASE__PATH` -> `database.path`, and so on.
//!
//! ```no_run
//! use court_config::CourtConfig;
//!
//! let config = CourtConfig::load().expect("config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod database;
mod dataset;
mod error;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use dataset::DatasetConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CourtConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CourtConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// `.env` files are not read here; the CLI loads them before calling in.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if any source fails to parse or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(None).extract().map_err(ConfigError::from)
    }

    /// Load configuration, layering `extra` above the project file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on parse or type errors.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(extra).extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".courtside/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("COURT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("courtside").join("config.toml"))
    }
}
