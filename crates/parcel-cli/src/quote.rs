//! # Quote Subcommand
//!
//! Prices one package against the configured cost table.
//!
//! ```bash
//! parcel quote 300 300 150 1000
//! # Shipping costs: 3.89 €
//!
//! parcel quote 120 250 250 750 --json
//! ```

use anyhow::{Context, Result};
use clap::Args;

use parcel_core::{quote_from_path, Package, Quote};

use crate::config::Settings;
use crate::{format_price, report_failure};

/// Arguments for the quote subcommand.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Length in millimetres.
    #[arg(allow_negative_numbers = true)]
    pub length: i64,

    /// Width in millimetres.
    #[arg(allow_negative_numbers = true)]
    pub width: i64,

    /// Height in millimetres.
    #[arg(allow_negative_numbers = true)]
    pub height: i64,

    /// Weight in grams.
    #[arg(allow_negative_numbers = true)]
    pub weight: i64,

    /// Print the full quote as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the quote subcommand.
pub fn run_quote(args: &QuoteArgs, settings: &Settings) -> Result<u8> {
    let package = Package::new(args.length, args.width, args.height, args.weight);
    tracing::info!(?package, table = %settings.cost_table.display(), "pricing package");

    let quote = match quote_from_path(&package, &settings.cost_table) {
        Ok(quote) => quote,
        Err(e) => {
            tracing::debug!(error = ?e, "pricing failed");
            return Ok(report_failure(&e));
        }
    };

    println!("{}", render_quote(&quote, args.json, &settings.currency_symbol)?);
    Ok(0)
}

/// Format a quote for stdout: pretty JSON, or the one-line human summary.
pub fn render_quote(quote: &Quote, json: bool, currency_symbol: &str) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(quote).context("failed to serialize quote");
    }
    Ok(format!(
        "Shipping costs: {}",
        format_price(quote.price, currency_symbol)
    ))
}
