//! Installment discount calculations.
//!
//! The discount schedule maps an installment count to the fraction of the
//! balance that is waived; the quote engine applies it to a balance.

pub mod common;
pub mod discount_schedule;
pub mod quote;

pub use discount_schedule::{
    DEFAULT_INSTALLMENTS, DiscountTier, MAX_DISCOUNT_RATE, MAX_INSTALLMENTS, MIN_INSTALLMENTS,
    discount_rate_for, schedule,
};
pub use quote::{QuoteEngine, QuoteError, compute_quote, lump_sum_quote};
