use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AccountRecord, IdScheme};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Account source error: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Read-only access to the account records owned by an external service.
///
/// Implementations trim `identifier` and compare primary ids exactly and
/// secondary ids without regard to ASCII case (see [`AccountRecord::matches`]).
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_account(
        &self,
        identifier: &str,
        scheme: IdScheme,
    ) -> Result<Option<AccountRecord>, RepositoryError>;

    async fn list_accounts(&self) -> Result<Vec<AccountRecord>, RepositoryError>;
}
