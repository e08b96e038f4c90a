//! # parcel-cli: Command-Line Front End for the Parcel Rate Stack
//!
//! Provides the `parcel` command. Argument parsing and output live here;
//! every pricing decision is delegated to `parcel-core`.
//!
//! ## Subcommands
//!
//! - `parcel quote <length> <width> <height> <weight>`: Price one package.
//! - `parcel table`: Load and print the configured cost table.
//! - `parcel tiers`: Print the tier overview with current prices.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration or unexpected failure |
//! | 2 | The package was rejected (fix the input) |
//! | 3 | The cost table could not be loaded (fix the installation) |

pub mod config;
pub mod quote;
pub mod table;
pub mod tiers;

use rust_decimal::Decimal;

use parcel_core::ParcelError;

/// Exit code for a rejected package.
pub const EXIT_INPUT_ERROR: u8 = 2;

/// Exit code for an unloadable cost table.
pub const EXIT_TABLE_ERROR: u8 = 3;

/// Render a price for humans, e.g. `3.89 €`.
pub fn format_price(price: Decimal, currency_symbol: &str) -> String {
    if currency_symbol.is_empty() {
        price.to_string()
    } else {
        format!("{price} {currency_symbol}")
    }
}

/// Print a pricing failure to stderr and map it to its exit code.
pub fn report_failure(err: &ParcelError) -> u8 {
    eprintln!("Error: {err}");
    if err.is_input_error() {
        EXIT_INPUT_ERROR
    } else {
        EXIT_TABLE_ERROR
    }
}
