use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount, total and per-installment figures for one balance and plan.
///
/// Values are unrounded. Rounding to currency minor units is a display concern
/// and must never be fed back into a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub balance: Decimal,
    pub installment_count: u32,
    /// Fraction of the balance waived, in `[0, 1]`.
    pub discount_rate: Decimal,
    /// `balance * discount_rate`
    pub discount_amount: Decimal,
    /// `balance - discount_amount`
    pub total_due: Decimal,
    /// `total_due / installment_count`
    pub per_installment_amount: Decimal,
}
