//! Application configuration.
//!
//! Read from an optional TOML file; every key has a default so an empty or
//! absent file is valid. Command-line flags override file values.
//!
//! ```toml
//! lookup_delay_ms = 700
//! currency_symbol = "Q"
//! default_installments = 6
//!
//! [store]
//! backend = "csv"
//! source = "accounts.csv"
//! ```

use std::path::{Path, PathBuf};

use debt_core::calculations::{DEFAULT_INSTALLMENTS, MAX_INSTALLMENTS, MIN_INSTALLMENTS};
use debt_core::store::StoreConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("default_installments must be between 1 and 12, got {0}")]
    DefaultInstallments(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    /// Simulated network latency before a lookup resolves.
    pub lookup_delay_ms: u64,
    pub currency_symbol: String,
    pub default_installments: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            lookup_delay_ms: 700,
            currency_symbol: "Q".to_string(),
            default_installments: DEFAULT_INSTALLMENTS,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(
        input: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(&self.default_installments) {
            return Err(ConfigError::DefaultInstallments(self.default_installments));
        }
        Ok(self)
    }
}
