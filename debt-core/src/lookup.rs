//! Identifier-to-account resolution against an injected account store.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{AccountRecord, IdScheme};
use crate::store::{AccountRepository, RepositoryError};
use crate::validation::{IdentifierError, validate_identifier};

/// Why a lookup did not produce an account.
///
/// None of these are retried: the identifier is wrong, the account is not
/// there, or the store itself failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("no account found for {} {identifier}", .scheme.label())]
    AccountNotFound { scheme: IdScheme, identifier: String },

    #[error("account store error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Validates `identifier` under `scheme` and fetches the matching account.
///
/// The identifier is trimmed before it reaches the store.
///
/// # Errors
///
/// * [`LookupError::InvalidIdentifier`] if the identifier is malformed; the
///   store is not queried.
/// * [`LookupError::AccountNotFound`] if the store has no match.
/// * [`LookupError::Repository`] if the store fails.
pub async fn find_account<R>(
    repo: &R,
    identifier: &str,
    scheme: IdScheme,
) -> Result<AccountRecord, LookupError>
where
    R: AccountRepository + ?Sized,
{
    let identifier = validate_identifier(identifier, scheme).inspect_err(|e| {
        warn!(%scheme, input = %e.input, "rejected malformed identifier");
    })?;

    debug!(%scheme, "looking up account");
    match repo.find_account(&identifier, scheme).await? {
        Some(account) => {
            info!(%scheme, name = %account.display_name, "account found");
            Ok(account)
        }
        None => {
            info!(%scheme, "no matching account");
            Err(LookupError::AccountNotFound { scheme, identifier })
        }
    }
}
