use debt_core::Quote;
use rust_decimal::Decimal;

use crate::utils::{format_currency, format_percent};

/// Table of plans for one balance, one row per quote.
pub fn render_quote_table(
    balance: Decimal,
    quotes: &[Quote],
    currency: &str,
) -> String {
    let mut lines = vec![
        format!("Balance: {}", format_currency(balance, currency)),
        format!(
            "{:>12}  {:>8}  {:>16}  {:>16}  {:>16}",
            "installments", "discount", "savings", "total due", "per installment"
        ),
    ];

    lines.extend(quotes.iter().map(|quote| {
        format!(
            "{:>12}  {:>8}  {:>16}  {:>16}  {:>16}",
            quote.installment_count,
            format_percent(quote.discount_rate),
            format_currency(quote.discount_amount, currency),
            format_currency(quote.total_due, currency),
            format_currency(quote.per_installment_amount, currency),
        )
    }));

    lines.join("\n")
}
