//! Quote engine: applies the discount schedule to an account balance.
//!
//! | Field                    | Formula |
//! |--------------------------|---------|
//! | `discount_rate`          | schedule rate for the installment count |
//! | `discount_amount`        | `balance * discount_rate` |
//! | `total_due`              | `balance - discount_amount` |
//! | `per_installment_amount` | `total_due / installment_count` |
//!
//! Nothing is rounded here, so `total_due + discount_amount == balance`
//! holds exactly.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use debt_core::calculations::compute_quote;
//!
//! let quote = compute_quote(dec!(12500.50), 6).unwrap();
//!
//! assert_eq!(quote.discount_rate, dec!(0.25));
//! assert_eq!(quote.discount_amount, dec!(3125.125));
//! assert_eq!(quote.total_due, dec!(9375.375));
//! assert_eq!(quote.per_installment_amount, dec!(1562.5625));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::Quote;
use crate::calculations::discount_schedule::discount_rate_for;

/// Errors that can occur while computing a quote.
///
/// Both are contract violations by the caller, which is expected to keep the
/// installment count in its offered range and to pass balances from the
/// account store as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// The installment count was zero, so there is nothing to divide by.
    #[error("installment count must be at least 1, got {0}")]
    InvalidInstallmentCount(u32),

    /// The balance was below zero.
    #[error("balance must not be negative, got {0}")]
    NegativeBalance(Decimal),
}

/// Computes the quote for paying `balance` in `installment_count` payments.
///
/// # Errors
///
/// * [`QuoteError::InvalidInstallmentCount`] if `installment_count` is 0.
/// * [`QuoteError::NegativeBalance`] if `balance` is below zero.
pub fn compute_quote(
    balance: Decimal,
    installment_count: u32,
) -> Result<Quote, QuoteError> {
    QuoteEngine::new(balance).quote(installment_count)
}

/// Quote for settling the whole balance in one payment.
pub fn lump_sum_quote(balance: Decimal) -> Result<Quote, QuoteError> {
    compute_quote(balance, 1)
}

/// Calculator bound to a single balance.
///
/// A caller that lets the user move between installment counts can hold one
/// engine for the looked-up balance and ask it for a quote on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteEngine {
    balance: Decimal,
}

impl QuoteEngine {
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }

    /// Computes the quote for `installment_count` payments.
    ///
    /// # Errors
    ///
    /// See [`compute_quote`].
    pub fn quote(
        &self,
        installment_count: u32,
    ) -> Result<Quote, QuoteError> {
        if installment_count == 0 {
            return Err(QuoteError::InvalidInstallmentCount(installment_count));
        }
        if self.balance < Decimal::ZERO {
            return Err(QuoteError::NegativeBalance(self.balance));
        }

        let discount_rate = discount_rate_for(installment_count);
        let discount_amount = self.discount_amount(discount_rate);
        let total_due = self.total_due(discount_amount);
        let per_installment_amount = self.per_installment_amount(total_due, installment_count);

        Ok(Quote {
            balance: self.balance,
            installment_count,
            discount_rate,
            discount_amount,
            total_due,
            per_installment_amount,
        })
    }

    /// Quotes for every count in `counts`, in order.
    pub fn quotes<I>(
        &self,
        counts: I,
    ) -> Result<Vec<Quote>, QuoteError>
    where
        I: IntoIterator<Item = u32>,
    {
        counts.into_iter().map(|n| self.quote(n)).collect()
    }

    fn discount_amount(
        &self,
        rate: Decimal,
    ) -> Decimal {
        self.balance * rate
    }

    fn total_due(
        &self,
        discount_amount: Decimal,
    ) -> Decimal {
        self.balance - discount_amount
    }

    fn per_installment_amount(
        &self,
        total_due: Decimal,
        installment_count: u32,
    ) -> Decimal {
        total_due / Decimal::from(installment_count)
    }
}
