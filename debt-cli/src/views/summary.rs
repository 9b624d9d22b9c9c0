use debt_core::calculations::{MAX_INSTALLMENTS, MIN_INSTALLMENTS, lump_sum_quote, schedule};
use debt_core::{AccountRecord, Quote, QuoteError};
use rust_decimal::Decimal;

use crate::utils::{format_currency, format_percent};

/// Account summary for the selected plan, plus the lump-sum figure and the
/// schedule legend.
///
/// # Errors
///
/// Propagates [`QuoteError`] from the lump-sum quote (negative balance).
pub fn render_summary(
    account: &AccountRecord,
    quote: &Quote,
    currency: &str,
) -> Result<String, QuoteError> {
    let lump_sum = lump_sum_quote(account.current_balance)?;
    let plural = if quote.installment_count == 1 { "" } else { "s" };

    let lines = [
        account.display_name.clone(),
        format!("Current balance:        {}", format_currency(account.current_balance, currency)),
        String::new(),
        format!("Plan:                   {} installment{plural}", quote.installment_count),
        format!("Discount applied:       {}", format_percent(quote.discount_rate)),
        format!("Savings:                {}", format_currency(quote.discount_amount, currency)),
        format!("Total due:              {}", format_currency(quote.total_due, currency)),
        format!(
            "Per installment:        {}",
            format_currency(quote.per_installment_amount, currency)
        ),
        String::new(),
        format!(
            "Pay today (1 payment):  {} ({} off)",
            format_currency(lump_sum.total_due, currency),
            format_percent(lump_sum.discount_rate)
        ),
        String::new(),
        render_schedule_legend(),
        "The discount depends on the number of installments. You can renegotiate your plan later."
            .to_string(),
    ];

    Ok(lines.join("\n"))
}

/// One line listing the rate for every offered count; counts with no
/// discount are collapsed into a range (`7-12: 0%`).
pub fn render_schedule_legend() -> String {
    let tiers = schedule(MIN_INSTALLMENTS..=MAX_INSTALLMENTS);

    let mut parts: Vec<String> = tiers
        .iter()
        .filter(|t| t.rate > Decimal::ZERO)
        .map(|t| format!("{}: {}", t.installments, format_percent(t.rate)))
        .collect();

    let no_discount: Vec<u32> = tiers
        .iter()
        .filter(|t| t.rate.is_zero())
        .map(|t| t.installments)
        .collect();
    match (no_discount.first(), no_discount.last()) {
        (Some(first), Some(last)) if first != last => parts.push(format!("{first}-{last}: 0%")),
        (Some(only), _) => parts.push(format!("{only}: 0%")),
        _ => {}
    }

    format!("Installments  {}", parts.join(" | "))
}
