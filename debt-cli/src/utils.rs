use debt_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Trims whitespace, drops thousands separators and a leading currency symbol.
fn normalize_amount_input(
    s: &str,
    symbol: &str,
) -> String {
    let s = s.trim();
    let s = if symbol.is_empty() {
        s
    } else {
        s.strip_prefix(symbol).unwrap_or(s)
    };
    s.trim().replace(',', "")
}

/// Parses a user-entered amount such as `"12,500.50"` or `"Q3500"`.
///
/// # Errors
///
/// [`ParseAmountError::Empty`] when nothing but whitespace or the symbol is
/// given, [`ParseAmountError::Invalid`] when the rest is not a number.
pub fn parse_amount(
    s: &str,
    symbol: &str,
) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s, symbol);
    if normalized.is_empty() {
        tracing::warn!(input = %s, "empty amount");
        return Err(ParseAmountError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats `amount` as currency for display: half-up to two decimals,
/// comma thousands separators, symbol in front (`Q12,500.50`, `-Q0.01`).
///
/// Display only. The rounded value must not be fed back into a quote.
pub fn format_currency(
    amount: Decimal,
    symbol: &str,
) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{sign}{symbol}{}.{cents}", group_thousands(whole))
}

/// Formats a rate in `[0, 1]` as a whole percentage (`0.45` -> `45%`).
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).round())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
