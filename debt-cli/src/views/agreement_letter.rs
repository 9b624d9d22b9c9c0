use chrono::NaiveDate;
use debt_core::{AccountRecord, IdScheme, Quote};

use crate::utils::{format_currency, format_percent};

/// Preview of the payment agreement letter. Not a binding document.
///
/// The identification line uses the scheme the client searched with.
pub fn render_agreement_letter(
    account: &AccountRecord,
    scheme: IdScheme,
    quote: &Quote,
    currency: &str,
    issued_on: NaiveDate,
) -> String {
    let rule = "-".repeat(56);

    let lines = [
        "Payment Agreement Letter (preview)".to_string(),
        "Non-binding document issued by this prototype.".to_string(),
        format!("Issued: {}", issued_on.format("%Y-%m-%d")),
        rule.clone(),
        format!("Client:            {}", account.display_name),
        format!("Identification:    {} {}", scheme.label(), account.identifier(scheme)),
        format!("Current balance:   {}", format_currency(quote.balance, currency)),
        format!("Selected plan:     {} installment(s)", quote.installment_count),
        format!(
            "Discount applied:  {} ({})",
            format_percent(quote.discount_rate),
            format_currency(quote.discount_amount, currency)
        ),
        format!("Total due:         {}", format_currency(quote.total_due, currency)),
        format!("Per installment:   {}", format_currency(quote.per_installment_amount, currency)),
        rule,
        "Start date and payment calendar will be set when the agreement is formalized.".to_string(),
        "You can renegotiate your plan later.".to_string(),
    ];

    lines.join("\n")
}
