use std::path::Path;

use async_trait::async_trait;
use debt_core::store::{
    AccountRepository, AccountStoreFactory, InMemoryAccountRepository, RepositoryError, StoreConfig,
};
use tracing::info;

use crate::loader::AccountCsvLoader;

/// Serves accounts read from the CSV file named by [`StoreConfig::source`].
///
/// The file is read once, when the store is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvStoreFactory;

impl CsvStoreFactory {
    pub const BACKEND: &'static str = "csv";
}

#[async_trait]
impl AccountStoreFactory for CsvStoreFactory {
    fn backend_name(&self) -> &'static str {
        Self::BACKEND
    }

    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn AccountRepository>, RepositoryError> {
        if config.source.trim().is_empty() {
            return Err(RepositoryError::Configuration(
                "csv backend needs a source file path".to_string(),
            ));
        }

        let path = Path::new(config.source.trim());
        let accounts = AccountCsvLoader::load_from_file(path)
            .map_err(|e| RepositoryError::Source(e.to_string()))?;

        info!(path = %path.display(), count = accounts.len(), "loaded accounts from CSV");
        Ok(Box::new(InMemoryAccountRepository::new(accounts)))
    }
}
