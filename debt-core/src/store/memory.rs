use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::trace;

use super::repository::{AccountRepository, RepositoryError};
use crate::models::{AccountRecord, IdScheme};

/// Account store backed by a fixed list of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryAccountRepository {
    accounts: Vec<AccountRecord>,
}

impl InMemoryAccountRepository {
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        Self { accounts }
    }

    /// The demo table: one client reachable by each sample identifier.
    pub fn with_sample_accounts() -> Self {
        Self::new(sample_accounts())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_account(
        &self,
        identifier: &str,
        scheme: IdScheme,
    ) -> Result<Option<AccountRecord>, RepositoryError> {
        let found = self
            .accounts
            .iter()
            .find(|a| a.matches(identifier, scheme))
            .cloned();
        trace!(%scheme, found = found.is_some(), "in-memory account lookup");
        Ok(found)
    }

    async fn list_accounts(&self) -> Result<Vec<AccountRecord>, RepositoryError> {
        Ok(self.accounts.clone())
    }
}

/// Sample clients: `1234567890123` / `10020030K` and `1111222233334` / `9876543-1`.
pub fn sample_accounts() -> Vec<AccountRecord> {
    vec![
        AccountRecord {
            primary_id: "1234567890123".to_string(),
            secondary_id: "10020030K".to_string(),
            display_name: "Juan Pérez".to_string(),
            current_balance: Decimal::new(350000, 2),
        },
        AccountRecord {
            primary_id: "1111222233334".to_string(),
            secondary_id: "9876543-1".to_string(),
            display_name: "María García".to_string(),
            current_balance: Decimal::new(1250050, 2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::validation::{is_valid_primary_id, is_valid_secondary_id};

    #[tokio::test]
    async fn finds_sample_by_primary_id() {
        let repo = InMemoryAccountRepository::with_sample_accounts();

        let found = repo
            .find_account("1234567890123", IdScheme::Primary)
            .await
            .unwrap()
            .expect("sample account should exist");

        assert_eq!(found.display_name, "Juan Pérez");
        assert_eq!(found.current_balance, dec!(3500.00));
    }

    #[tokio::test]
    async fn finds_sample_by_secondary_id_ignoring_case() {
        let repo = InMemoryAccountRepository::with_sample_accounts();

        let found = repo
            .find_account(" 10020030k ", IdScheme::Secondary)
            .await
            .unwrap();

        assert_eq!(found.map(|a| a.primary_id), Some("1234567890123".to_string()));
    }

    #[tokio::test]
    async fn finds_hyphenated_secondary_id() {
        let repo = InMemoryAccountRepository::with_sample_accounts();

        let found = repo
            .find_account("9876543-1", IdScheme::Secondary)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.current_balance, dec!(12500.50));
    }

    #[tokio::test]
    async fn unknown_identifier_is_none() {
        let repo = InMemoryAccountRepository::with_sample_accounts();

        let found = repo
            .find_account("9999999999999", IdScheme::Primary)
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn empty_repository_finds_nothing() {
        let repo = InMemoryAccountRepository::default();

        assert!(repo.is_empty());
        assert_eq!(
            repo.find_account("1234567890123", IdScheme::Primary)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn list_returns_every_record() {
        let repo = InMemoryAccountRepository::with_sample_accounts();

        let all = repo.list_accounts().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn sample_identifiers_are_well_formed() {
        for account in sample_accounts() {
            assert!(is_valid_primary_id(&account.primary_id));
            assert!(is_valid_secondary_id(&account.secondary_id));
            assert!(account.current_balance >= Decimal::ZERO);
        }
    }
}
