//! CSV loader for account records.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is trimmed.
//!
//! | Column            | Type    | Notes |
//! |-------------------|---------|-------|
//! | `primary_id`      | string  | 13 digits (DPI) |
//! | `secondary_id`    | string  | digits/hyphens ending in a digit or `K` (NIT) |
//! | `display_name`    | string  | |
//! | `current_balance` | decimal | must not be negative |
//!
//! ```csv
//! primary_id,secondary_id,display_name,current_balance
//! 1234567890123,10020030K,Juan Pérez,3500.00
//! ```

use std::io::Read;
use std::path::Path;

use debt_core::AccountRecord;
use debt_core::validation::{is_valid_primary_id, is_valid_secondary_id};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct CsvRow {
    primary_id: String,
    secondary_id: String,
    display_name: String,
    current_balance: Decimal,
}

/// Errors that can occur while loading account records.
#[derive(Debug, Error)]
pub enum AccountLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Structural problem: missing column, bad decimal, wrong field count.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("invalid primary id '{value}' on row {row}")]
    InvalidPrimaryId { value: String, row: usize },

    #[error("invalid secondary id '{value}' on row {row}")]
    InvalidSecondaryId { value: String, row: usize },

    #[error("negative balance {balance} on row {row}")]
    NegativeBalance { balance: Decimal, row: usize },
}

/// Reads account records from CSV.
pub struct AccountCsvLoader;

impl AccountCsvLoader {
    /// Parse records from any reader. Rows come back in file order.
    ///
    /// # Errors
    ///
    /// * [`AccountLoadError::Parse`] if the CSV is structurally invalid.
    /// * [`AccountLoadError::InvalidPrimaryId`],
    ///   [`AccountLoadError::InvalidSecondaryId`] or
    ///   [`AccountLoadError::NegativeBalance`] naming the first bad row
    ///   (1-based, header excluded).
    pub fn parse<R: Read>(reader: R) -> Result<Vec<AccountRecord>, AccountLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| convert_row(result?, idx + 1))
            .collect()
    }

    pub fn load_from_str(input: &str) -> Result<Vec<AccountRecord>, AccountLoadError> {
        Self::parse(input.as_bytes())
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<AccountRecord>, AccountLoadError> {
        let file = std::fs::File::open(path).map_err(|source| AccountLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<AccountRecord, AccountLoadError> {
    if !is_valid_primary_id(&row.primary_id) {
        return Err(AccountLoadError::InvalidPrimaryId {
            value: row.primary_id,
            row: row_number,
        });
    }
    if !is_valid_secondary_id(&row.secondary_id) {
        return Err(AccountLoadError::InvalidSecondaryId {
            value: row.secondary_id,
            row: row_number,
        });
    }
    if row.current_balance < Decimal::ZERO {
        return Err(AccountLoadError::NegativeBalance {
            balance: row.current_balance,
            row: row_number,
        });
    }

    Ok(AccountRecord {
        primary_id: row.primary_id,
        secondary_id: row.secondary_id,
        display_name: row.display_name,
        current_balance: row.current_balance,
    })
}
