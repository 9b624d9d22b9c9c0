//! Wiring between the session, the account store and the core.

use std::time::Duration;

use debt_core::calculations::{MAX_INSTALLMENTS, MIN_INSTALLMENTS};
use debt_core::store::{AccountRepository, RepositoryError, StoreConfig, StoreRegistry};
use debt_core::{AccountRecord, LookupError, QuoteEngine, find_account};
use debt_data::CsvStoreFactory;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::state::SessionState;
use crate::utils::parse_amount;
use crate::views::render_quote_table;

/// Registry with every account source this binary knows about.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::with_builtin();
    registry.register(Box::new(CsvStoreFactory));
    registry
}

pub async fn open_store(
    config: &StoreConfig,
) -> Result<Box<dyn AccountRepository>, RepositoryError> {
    let registry = build_registry();
    debug!(available = ?registry.available_backends(), "store backends");
    registry.create(config).await
}

/// Applies a requested plan to the session, warning when it had to be clamped.
/// Returns the count actually applied.
pub fn apply_installments(
    state: &mut SessionState,
    requested: Option<u32>,
) -> u32 {
    let Some(requested) = requested else {
        return state.installments();
    };

    let applied = state.set_installments(requested);
    if applied != requested {
        warn!(requested, applied, "installment count outside 1-12, clamped");
    }
    applied
}

/// Installment counts to quote: every offered plan with `all`, otherwise the
/// requested or default plan after clamping.
pub fn plan_counts(
    requested: Option<u32>,
    default_installments: u32,
    all: bool,
) -> Vec<u32> {
    if all {
        return (MIN_INSTALLMENTS..=MAX_INSTALLMENTS).collect();
    }

    let mut state = SessionState::new(default_installments);
    vec![apply_installments(&mut state, requested)]
}

/// Quote table for a typed-in balance, without a lookup.
///
/// # Errors
///
/// Fails on an empty or malformed balance and on a negative one.
pub fn quote_balance(
    config: &AppConfig,
    balance: &str,
    installments: Option<u32>,
    all: bool,
) -> anyhow::Result<String> {
    let balance = parse_amount(balance, &config.currency_symbol)?;
    let counts = plan_counts(installments, config.default_installments, all);
    let quotes = QuoteEngine::new(balance).quotes(counts)?;

    Ok(render_quote_table(balance, &quotes, &config.currency_symbol))
}

/// Looks up the session's identifier after the simulated network delay and
/// stores the result on the session.
///
/// Any previous account is cleared first, so a failed search leaves the
/// session without an account.
///
/// # Errors
///
/// Whatever [`find_account`] reports. A malformed identifier is rejected
/// before waiting.
pub async fn search<R>(
    state: &mut SessionState,
    repo: &R,
    delay: Duration,
) -> Result<AccountRecord, LookupError>
where
    R: AccountRepository + ?Sized,
{
    state.account = None;

    if !state.can_search() {
        // Let the core produce the error so it matches the validator's view.
        return find_account(repo, &state.identifier, state.scheme).await;
    }

    info!(scheme = %state.scheme, ?delay, "searching");
    tokio::time::sleep(delay).await;

    let account = find_account(repo, &state.identifier, state.scheme).await?;
    state.account = Some(account.clone());
    Ok(account)
}
