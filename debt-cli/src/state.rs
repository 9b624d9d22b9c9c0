//! Session state for one client consultation.
//!
//! Holds what the user has entered and what the lookup returned. The core
//! holds no state; quotes are recomputed from this on every request.

use debt_core::calculations::{MAX_INSTALLMENTS, MIN_INSTALLMENTS};
use debt_core::validation::is_valid_identifier;
use debt_core::{AccountRecord, IdScheme, Quote, QuoteError, compute_quote};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub scheme: IdScheme,
    pub identifier: String,
    /// Always within `MIN_INSTALLMENTS..=MAX_INSTALLMENTS`.
    installments: u32,
    /// Result of the last successful lookup.
    pub account: Option<AccountRecord>,
}

impl SessionState {
    pub fn new(default_installments: u32) -> Self {
        Self {
            scheme: IdScheme::default(),
            identifier: String::new(),
            installments: clamp_installments(default_installments),
            account: None,
        }
    }

    pub fn installments(&self) -> u32 {
        self.installments
    }

    /// Selects an installment plan, clamped to the offered range.
    /// Returns the count actually applied.
    pub fn set_installments(
        &mut self,
        count: u32,
    ) -> u32 {
        self.installments = clamp_installments(count);
        self.installments
    }

    /// Whether the entered identifier is well formed for the chosen scheme.
    pub fn can_search(&self) -> bool {
        !self.identifier.trim().is_empty() && is_valid_identifier(&self.identifier, self.scheme)
    }

    /// Quote for the current account and plan, `None` before a lookup.
    pub fn quote(&self) -> Result<Option<Quote>, QuoteError> {
        self.account
            .as_ref()
            .map(|a| compute_quote(a.current_balance, self.installments))
            .transpose()
    }

    /// Forget the identifier and account, keeping the scheme and plan.
    pub fn clear(&mut self) {
        self.identifier.clear();
        self.account = None;
    }
}

fn clamp_installments(count: u32) -> u32 {
    count.clamp(MIN_INSTALLMENTS, MAX_INSTALLMENTS)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn account() -> AccountRecord {
        AccountRecord {
            primary_id: "1234567890123".to_string(),
            secondary_id: "10020030K".to_string(),
            display_name: "Juan Pérez".to_string(),
            current_balance: dec!(3500.00),
        }
    }

    #[test]
    fn new_session_uses_default_plan() {
        let state = SessionState::new(6);

        assert_eq!(state.installments(), 6);
        assert_eq!(state.scheme, IdScheme::Primary);
        assert_eq!(state.account, None);
    }

    #[test]
    fn installments_are_clamped_to_offered_range() {
        let mut state = SessionState::new(0);
        assert_eq!(state.installments(), 1);

        assert_eq!(state.set_installments(40), 12);
        assert_eq!(state.set_installments(0), 1);
        assert_eq!(state.set_installments(2), 2);
    }

    #[test]
    fn can_search_follows_scheme() {
        let mut state = SessionState::new(6);
        assert!(!state.can_search());

        state.identifier = "10020030K".to_string();
        assert!(!state.can_search());

        state.scheme = IdScheme::Secondary;
        assert!(state.can_search());
    }

    #[test]
    fn quote_is_none_before_lookup() {
        assert_eq!(SessionState::new(6).quote(), Ok(None));
    }

    #[test]
    fn quote_tracks_selected_plan() {
        let mut state = SessionState::new(6);
        state.account = Some(account());

        let six = state.quote().unwrap().unwrap();
        assert_eq!(six.discount_rate, dec!(0.25));

        state.set_installments(1);
        let one = state.quote().unwrap().unwrap();
        assert_eq!(one.total_due, dec!(2100.00));
    }

    #[test]
    fn clear_keeps_scheme_and_plan() {
        let mut state = SessionState::new(3);
        state.scheme = IdScheme::Secondary;
        state.identifier = "10020030K".to_string();
        state.account = Some(account());

        state.clear();

        assert_eq!(state.identifier, "");
        assert_eq!(state.account, None);
        assert_eq!(state.scheme, IdScheme::Secondary);
        assert_eq!(state.installments(), 3);
    }
}
