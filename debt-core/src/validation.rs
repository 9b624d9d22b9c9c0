//! Syntactic checks for identity document numbers.
//!
//! | scheme    | document | accepted form |
//! |-----------|----------|---------------|
//! | primary   | DPI      | exactly 13 decimal digits |
//! | secondary | NIT      | 4+ characters of digits and hyphens, ending in a digit or `K` |
//!
//! Input is trimmed before checking. These are format checks only; they say
//! nothing about whether the document exists.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::IdScheme;

static PRIMARY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("primary id pattern is valid"));

static SECONDARY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9-]*[0-9Kk]$").expect("secondary id pattern is valid"));

const SECONDARY_MIN_LEN: usize = 4;

/// Error returned when an identifier fails the check for its scheme.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{input}' is not a valid {} number", .scheme.label())]
pub struct IdentifierError {
    pub scheme: IdScheme,
    pub input: String,
}

/// True iff the trimmed input is exactly 13 decimal digits.
///
/// ```
/// use debt_core::validation::is_valid_primary_id;
///
/// assert!(is_valid_primary_id("1234567890123"));
/// assert!(!is_valid_primary_id("123"));
/// ```
pub fn is_valid_primary_id(s: &str) -> bool {
    PRIMARY_ID.is_match(s.trim())
}

/// True iff the trimmed input has at least four characters of digits and
/// hyphens and ends in a digit or `K` (either case).
///
/// ```
/// use debt_core::validation::is_valid_secondary_id;
///
/// assert!(is_valid_secondary_id("10020030K"));
/// assert!(is_valid_secondary_id("9876543-1"));
/// assert!(!is_valid_secondary_id(""));
/// ```
pub fn is_valid_secondary_id(s: &str) -> bool {
    let s = s.trim();
    s.len() >= SECONDARY_MIN_LEN && SECONDARY_ID.is_match(s)
}

pub fn is_valid_identifier(
    s: &str,
    scheme: IdScheme,
) -> bool {
    match scheme {
        IdScheme::Primary => is_valid_primary_id(s),
        IdScheme::Secondary => is_valid_secondary_id(s),
    }
}

/// Checks `s` under `scheme` and returns it trimmed.
pub fn validate_identifier(
    s: &str,
    scheme: IdScheme,
) -> Result<String, IdentifierError> {
    if is_valid_identifier(s, scheme) {
        Ok(s.trim().to_string())
    } else {
        Err(IdentifierError {
            scheme,
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // primary id
    // =========================================================================

    #[test]
    fn primary_accepts_thirteen_digits() {
        assert!(is_valid_primary_id("1234567890123"));
        assert!(is_valid_primary_id("1111222233334"));
    }

    #[test]
    fn primary_rejects_wrong_length() {
        assert!(!is_valid_primary_id("123"));
        assert!(!is_valid_primary_id("123456789012"));
        assert!(!is_valid_primary_id("12345678901234"));
    }

    #[test]
    fn primary_trims_whitespace() {
        assert!(is_valid_primary_id("  1234567890123 \n"));
    }

    #[test]
    fn primary_rejects_non_digits() {
        assert!(!is_valid_primary_id("123456789012K"));
        assert!(!is_valid_primary_id("1234-567890123"));
        assert!(!is_valid_primary_id("123456 7890123"));
    }

    #[test]
    fn primary_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode \d but not document digits.
        assert!(!is_valid_primary_id("١٢٣٤٥٦٧٨٩٠١٢٣"));
    }

    #[test]
    fn primary_rejects_empty() {
        assert!(!is_valid_primary_id(""));
        assert!(!is_valid_primary_id("   "));
    }

    // =========================================================================
    // secondary id
    // =========================================================================

    #[test]
    fn secondary_accepts_sample_ids() {
        assert!(is_valid_secondary_id("10020030K"));
        assert!(is_valid_secondary_id("9876543-1"));
    }

    #[test]
    fn secondary_accepts_lowercase_k() {
        assert!(is_valid_secondary_id("10020030k"));
    }

    #[test]
    fn secondary_enforces_minimum_length() {
        assert!(!is_valid_secondary_id("12K"));
        assert!(is_valid_secondary_id("123K"));
        assert!(!is_valid_secondary_id(" 12K "));
    }

    #[test]
    fn secondary_rejects_bad_last_character() {
        assert!(!is_valid_secondary_id("1234567-"));
        assert!(!is_valid_secondary_id("1234567X"));
    }

    #[test]
    fn secondary_rejects_k_before_the_end() {
        assert!(!is_valid_secondary_id("10K20030"));
    }

    #[test]
    fn secondary_rejects_empty() {
        assert!(!is_valid_secondary_id(""));
    }

    // =========================================================================
    // validate_identifier
    // =========================================================================

    #[test]
    fn validate_returns_trimmed_identifier() {
        let id = validate_identifier(" 9876543-1 ", IdScheme::Secondary).unwrap();

        assert_eq!(id, "9876543-1");
    }

    #[test]
    fn validate_uses_scheme() {
        assert!(validate_identifier("10020030K", IdScheme::Primary).is_err());
        assert!(validate_identifier("1234567890123", IdScheme::Secondary).is_ok());
    }

    #[test]
    fn validate_error_carries_input_and_scheme() {
        let err = validate_identifier("123", IdScheme::Primary).unwrap_err();

        assert_eq!(
            err,
            IdentifierError {
                scheme: IdScheme::Primary,
                input: "123".to_string(),
            }
        );
        assert_eq!(err.to_string(), "'123' is not a valid DPI number");
    }
}
