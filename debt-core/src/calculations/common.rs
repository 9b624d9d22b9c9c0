//! Rounding helpers for presenting money.
//!
//! Calculations never round. These are applied when a value is shown to the
//! user and the rounded value is not fed back into a quote.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use debt_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3125.125)), dec!(3125.13));
/// assert_eq!(round_half_up(dec!(1562.5625)), dec!(1562.56));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
