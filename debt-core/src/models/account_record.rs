use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::IdScheme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// 13-digit personal document number (DPI).
    pub primary_id: String,
    /// Tax identification string (NIT), e.g. `10020030K` or `9876543-1`.
    pub secondary_id: String,
    pub display_name: String,
    pub current_balance: Decimal,
}

impl AccountRecord {
    /// The identifier this record is known by under `scheme`.
    pub fn identifier(
        &self,
        scheme: IdScheme,
    ) -> &str {
        match scheme {
            IdScheme::Primary => &self.primary_id,
            IdScheme::Secondary => &self.secondary_id,
        }
    }

    /// Whether `query` names this record under `scheme`.
    ///
    /// The query is trimmed first. Primary ids compare exactly, secondary ids
    /// ignore ASCII case (`10020030k` matches `10020030K`).
    pub fn matches(
        &self,
        query: &str,
        scheme: IdScheme,
    ) -> bool {
        let query = query.trim();
        match scheme {
            IdScheme::Primary => self.primary_id == query,
            IdScheme::Secondary => self.secondary_id.eq_ignore_ascii_case(query),
        }
    }
}
