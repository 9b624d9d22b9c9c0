use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::memory::InMemoryAccountRepository;
use super::repository::{AccountRepository, RepositoryError};

/// Backend-agnostic account source configuration.
///
/// `backend` must match the [`AccountStoreFactory::backend_name`] of a
/// registered factory.  `source` is passed through to that factory
/// unchanged; its meaning is backend-specific.
///
/// | backend  | source examples          |
/// |----------|--------------------------|
/// | `memory` | ignored                  |
/// | `csv`    | `accounts.csv`           |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"memory"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub source: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: MemoryStoreFactory::BACKEND.to_string(),
            source: String::new(),
        }
    }
}

/// One implementation per account source.  Each source exports a unit
/// struct that implements this trait and is registered with a
/// [`StoreRegistry`] at startup.
#[async_trait]
pub trait AccountStoreFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open the source and return a ready-to-use repository.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn AccountRepository>, RepositoryError>;
}

/// Serves the built-in sample accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStoreFactory;

impl MemoryStoreFactory {
    pub const BACKEND: &'static str = "memory";
}

#[async_trait]
impl AccountStoreFactory for MemoryStoreFactory {
    fn backend_name(&self) -> &'static str {
        Self::BACKEND
    }

    async fn create(
        &self,
        _config: &StoreConfig,
    ) -> Result<Box<dyn AccountRepository>, RepositoryError> {
        Ok(Box::new(InMemoryAccountRepository::with_sample_accounts()))
    }
}

/// Registry of [`AccountStoreFactory`] instances, keyed by backend name.
///
/// Typical lifetime:
/// 1. Create with `StoreRegistry::new()`.
/// 2. Call `register` once per known backend.
/// 3. Call `create` whenever a repository is needed.
pub struct StoreRegistry {
    factories: HashMap<&'static str, Box<dyn AccountStoreFactory>>,
}

impl StoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the `memory` backend already registered.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MemoryStoreFactory));
        registry
    }

    /// Register a backend factory.
    ///
    /// A factory with the same [`AccountStoreFactory::backend_name`] is
    /// replaced.
    pub fn register(
        &mut self,
        factory: Box<dyn AccountStoreFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend` and return
    /// the repository it produces.
    ///
    /// # Errors
    /// * [`RepositoryError::Configuration`] if no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn AccountRepository>, RepositoryError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                RepositoryError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        debug!(backend = %config.backend, "opening account store");
        factory.create(config).await
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}
