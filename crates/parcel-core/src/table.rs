//! # Cost Table: Price List Ingestion
//!
//! Loads the five tier prices from a small delimited text file. Only the
//! first line is significant:
//!
//! ```text
//! 3.89;4.39;5.89;7.99;14.99
//! ```
//!
//! Fields are separated by `;`, use `.` as the decimal separator and carry
//! no currency symbol. Column `i` is the price of [`Tier::ALL`]`[i]`.
//!
//! Prices are held as [`Decimal`], so the value written in the file is the
//! value read back: `3.89` stays `3.89`, with its scale intact.
//!
//! There is no caching. Every [`CostTable::load()`] reads the file again,
//! so an edited price list takes effect on the next quote.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::TableError;
use crate::tier::{Tier, TIER_COUNT};

/// Field separator of the cost table file.
pub const DELIMITER: char = ';';

/// The five tier prices, in tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CostTable {
    prices: [Decimal; TIER_COUNT],
}

impl CostTable {
    /// Build a table from prices in tier order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Malformed`] if any price is negative.
    pub fn new(prices: [Decimal; TIER_COUNT]) -> Result<Self, TableError> {
        for (i, price) in prices.iter().enumerate() {
            if *price < Decimal::ZERO {
                return Err(TableError::Malformed {
                    reason: format!("field {} is negative: {price}", i + 1),
                });
            }
        }
        Ok(Self { prices })
    }

    /// Read the table from the first line of the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`TableError::NotFound`] if nothing exists at `path`.
    /// - [`TableError::Empty`] if the file has no first line.
    /// - [`TableError::Malformed`] if the first line is not five
    ///   non-negative decimals separated by `;`.
    /// - [`TableError::Io`] for any other read failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading cost table");

        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TableError::NotFound {
                path: path.to_path_buf(),
            },
            _ => TableError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let mut line = String::new();
        let read = BufReader::new(file)
            .read_line(&mut line)
            .map_err(|source| match source.kind() {
                ErrorKind::InvalidData => TableError::Malformed {
                    reason: "first line is not valid UTF-8".to_string(),
                },
                _ => TableError::Io {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        if read == 0 {
            return Err(TableError::Empty {
                path: path.to_path_buf(),
            });
        }

        let table = Self::parse_line(line.trim_end_matches(['\n', '\r']))?;
        tracing::debug!(path = %path.display(), %table, "cost table loaded");
        Ok(table)
    }

    /// Parse a single `;`-separated line of five prices.
    ///
    /// Surrounding whitespace on each field is ignored. Plain (`3.89`) and
    /// scientific (`3.89e0`) notation are both accepted. Trailing empty
    /// fields are dropped before counting, so `1;2;3;4;5;` holds five prices.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Malformed`] if the field count is not five or
    /// a field is not a non-negative decimal.
    pub fn parse_line(line: &str) -> Result<Self, TableError> {
        let mut fields: Vec<&str> = line.split(DELIMITER).collect();
        while fields.last() == Some(&"") {
            fields.pop();
        }
        if fields.len() != TIER_COUNT {
            return Err(TableError::Malformed {
                reason: format!(
                    "expected {TIER_COUNT} fields separated by '{DELIMITER}', found {}",
                    fields.len()
                ),
            });
        }

        let mut prices = [Decimal::ZERO; TIER_COUNT];
        for (i, (slot, field)) in prices.iter_mut().zip(&fields).enumerate() {
            *slot = parse_price(field).ok_or_else(|| TableError::Malformed {
                reason: format!("field {} is not a decimal number: {field:?}", i + 1),
            })?;
        }

        Self::new(prices)
    }

    /// The price of `tier`.
    pub fn price(&self, tier: Tier) -> Decimal {
        self.prices[tier.index()]
    }

    /// All prices in tier order.
    pub fn prices(&self) -> &[Decimal; TIER_COUNT] {
        &self.prices
    }
}

/// Digits, `.`, signs and an exponent marker only. `Decimal::from_str`
/// alone also takes `_` separators, which a price list must not contain.
fn parse_price(field: &str) -> Option<Decimal> {
    let field = field.trim();
    if field.is_empty()
        || !field
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    if field.contains(['e', 'E']) {
        Decimal::from_scientific(field).ok()
    } else {
        Decimal::from_str(field).ok()
    }
}

impl FromStr for CostTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

/// Renders the table back in file format, e.g. `3.89;4.39;5.89;7.99;14.99`.
impl std::fmt::Display for CostTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, price) in self.prices.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{price}")?;
        }
        Ok(())
    }
}
