//! End-to-end consultation: config file, store, search, quote and rendering.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use debt_cli::app;
use debt_cli::config::AppConfig;
use debt_cli::state::SessionState;
use debt_cli::views::{render_agreement_letter, render_summary};
use debt_core::{IdScheme, LookupError};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn config_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("debt-desk.toml")
}

fn load_config() -> AppConfig {
    AppConfig::load(&config_fixture()).expect("fixture config should load")
}

#[test]
fn fixture_config_overrides_defaults() {
    let config = load_config();

    assert_eq!(config.lookup_delay_ms, 0);
    assert_eq!(config.default_installments, 2);
    assert_eq!(config.store.backend, "memory");
}

#[tokio::test]
async fn consultation_by_nit_produces_summary_and_letter() {
    let config = load_config();
    let repo = app::open_store(&config.store).await.unwrap();

    let mut state = SessionState::new(config.default_installments);
    state.scheme = IdScheme::Secondary;
    state.identifier = "10020030k".to_string();

    let account = app::search(&mut state, &*repo, Duration::from_millis(config.lookup_delay_ms))
        .await
        .unwrap();
    let quote = state.quote().unwrap().unwrap();

    assert_eq!(quote.discount_rate, dec!(0.45));
    assert_eq!(quote.discount_amount, dec!(1575.00));
    assert_eq!(quote.total_due, dec!(1925.00));
    assert_eq!(quote.per_installment_amount, dec!(962.50));

    let summary = render_summary(&account, &quote, &config.currency_symbol).unwrap();
    assert!(summary.contains("Per installment:        Q962.50"));

    let letter = render_agreement_letter(
        &account,
        state.scheme,
        &quote,
        &config.currency_symbol,
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
    );
    assert!(letter.contains("Identification:    NIT 10020030K"));
    assert!(letter.contains("Discount applied:  45% (Q1,575.00)"));
}

#[tokio::test]
async fn moving_the_plan_recomputes_from_unrounded_balance() {
    let repo = app::open_store(&load_config().store).await.unwrap();
    let mut state = SessionState::new(6);
    state.identifier = "1111222233334".to_string();
    app::search(&mut state, &*repo, Duration::ZERO).await.unwrap();

    let six = state.quote().unwrap().unwrap();
    state.set_installments(1);
    let one = state.quote().unwrap().unwrap();

    assert_eq!(six.per_installment_amount, dec!(1562.5625));
    assert_eq!(one.total_due, dec!(7500.30));
    assert_eq!(six.total_due + six.discount_amount, one.balance);
}

#[tokio::test]
async fn unknown_dpi_reports_not_found() {
    let repo = app::open_store(&load_config().store).await.unwrap();
    let mut state = SessionState::new(6);
    state.identifier = "0000000000000".to_string();

    let err = app::search(&mut state, &*repo, Duration::ZERO)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LookupError::AccountNotFound {
            scheme: IdScheme::Primary,
            identifier: "0000000000000".to_string(),
        }
    );
    assert_eq!(state.quote(), Ok(None));
}
