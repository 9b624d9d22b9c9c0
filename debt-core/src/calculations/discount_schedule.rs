//! Installment discount schedule.
//!
//! | Installments | Rate |
//! |--------------|------|
//! | 1            | 40%  |
//! | 2            | 45%  |
//! | 3            | 40%  |
//! | 4            | 35%  |
//! | 5            | 30%  |
//! | 6            | 25%  |
//! | 7 and above  | 0%   |
//!
//! The peak is at two installments, not one. The schedule is total over
//! `u32`; counts outside 1..=6 (including 0) carry no discount. Limiting the
//! selectable range is up to the caller.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Smallest installment count a caller offers.
pub const MIN_INSTALLMENTS: u32 = 1;

/// Largest installment count a caller offers.
pub const MAX_INSTALLMENTS: u32 = 12;

/// Installment count preselected for a new session.
pub const DEFAULT_INSTALLMENTS: u32 = 6;

/// Highest rate anywhere in the schedule (two installments).
pub const MAX_DISCOUNT_RATE: Decimal = Decimal::from_parts(45, 0, 0, false, 2);

/// One row of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub installments: u32,
    pub rate: Decimal,
}

/// Fraction of the balance waived when paying in `installment_count` payments.
///
/// ```
/// use rust_decimal_macros::dec;
/// use debt_core::calculations::discount_rate_for;
///
/// assert_eq!(discount_rate_for(1), dec!(0.40));
/// assert_eq!(discount_rate_for(2), dec!(0.45));
/// assert_eq!(discount_rate_for(12), dec!(0));
/// ```
pub fn discount_rate_for(installment_count: u32) -> Decimal {
    match installment_count {
        1 => Decimal::new(40, 2),
        2 => Decimal::new(45, 2),
        3 => Decimal::new(40, 2),
        4 => Decimal::new(35, 2),
        5 => Decimal::new(30, 2),
        6 => Decimal::new(25, 2),
        _ => Decimal::ZERO,
    }
}

/// The schedule rows for every count in `range`, in order.
pub fn schedule(range: RangeInclusive<u32>) -> Vec<DiscountTier> {
    range
        .map(|installments| DiscountTier {
            installments,
            rate: discount_rate_for(installments),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rates_for_defined_tiers() {
        let expected = [
            (1, dec!(0.40)),
            (2, dec!(0.45)),
            (3, dec!(0.40)),
            (4, dec!(0.35)),
            (5, dec!(0.30)),
            (6, dec!(0.25)),
        ];

        for (n, rate) in expected {
            assert_eq!(discount_rate_for(n), rate, "installments {n}");
        }
    }

    #[test]
    fn rate_peaks_at_two_installments() {
        assert!(discount_rate_for(2) > discount_rate_for(1));
        assert!(discount_rate_for(1) > discount_rate_for(4));
        assert_eq!(discount_rate_for(1), discount_rate_for(3));
    }

    #[test]
    fn lump_sum_ties_with_three_installments() {
        // 1 and 3 both earn 40%, so there is no strict order between them.
        assert_eq!(discount_rate_for(1), dec!(0.40));
        assert_eq!(discount_rate_for(3), dec!(0.40));
        assert!(discount_rate_for(1) <= discount_rate_for(3));
    }

    #[test]
    fn rates_never_rise_after_the_peak() {
        let rates: Vec<Decimal> = (2..=12).map(discount_rate_for).collect();

        for pair in rates.windows(2) {
            assert!(pair[0] >= pair[1], "{} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn rate_is_zero_from_seven_up() {
        for n in (7..=240).chain([1_000, u32::MAX]) {
            assert_eq!(discount_rate_for(n), Decimal::ZERO, "installments {n}");
        }
    }

    #[test]
    fn rate_is_zero_for_zero_installments() {
        assert_eq!(discount_rate_for(0), Decimal::ZERO);
    }

    #[test]
    fn rates_stay_within_unit_interval() {
        for n in 0..=24 {
            let rate = discount_rate_for(n);
            assert!(rate >= Decimal::ZERO && rate <= Decimal::ONE, "installments {n}");
        }
    }

    #[test]
    fn max_discount_rate_matches_schedule() {
        let highest = schedule(MIN_INSTALLMENTS..=MAX_INSTALLMENTS)
            .into_iter()
            .map(|t| t.rate)
            .max()
            .unwrap();

        assert_eq!(MAX_DISCOUNT_RATE, dec!(0.45));
        assert_eq!(highest, MAX_DISCOUNT_RATE);
    }

    #[test]
    fn schedule_lists_each_count_in_order() {
        let tiers = schedule(5..=8);

        assert_eq!(
            tiers,
            vec![
                DiscountTier { installments: 5, rate: dec!(0.30) },
                DiscountTier { installments: 6, rate: dec!(0.25) },
                DiscountTier { installments: 7, rate: dec!(0) },
                DiscountTier { installments: 8, rate: dec!(0) },
            ]
        );
    }

    #[test]
    fn default_installments_is_within_offered_range() {
        assert!((MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(&DEFAULT_INSTALLMENTS));
    }
}
