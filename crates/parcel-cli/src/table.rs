//! # Table Subcommand
//!
//! Loads the configured cost table and prints it, one tier per line. Useful
//! for checking a freshly deployed price list before quoting against it.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use parcel_core::{CostTable, ParcelError, Tier};

use crate::config::Settings;
use crate::{format_price, report_failure};

/// Arguments for the table subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Print the prices as a JSON array in tier order.
    #[arg(long)]
    pub json: bool,
}

/// Execute the table subcommand.
pub fn run_table(args: &TableArgs, settings: &Settings) -> Result<u8> {
    let table = match CostTable::load(&settings.cost_table) {
        Ok(table) => table,
        Err(e) => return Ok(report_failure(&ParcelError::from(e))),
    };

    println!(
        "{}",
        render_table(&table, &settings.cost_table, args.json, &settings.currency_symbol)?
    );
    Ok(0)
}

/// Format a loaded table for stdout: a compact JSON array of price strings,
/// or a header naming the file followed by one line per tier.
pub fn render_table(
    table: &CostTable,
    path: &Path,
    json: bool,
    currency_symbol: &str,
) -> Result<String> {
    if json {
        return serde_json::to_string(table).context("failed to serialize cost table");
    }

    let mut out = format!("Cost table: {}", path.display());
    for tier in Tier::ALL {
        out.push_str(&format!(
            "\n  {:<13} {}",
            tier.as_str(),
            format_price(table.price(tier), currency_symbol)
        ));
    }
    Ok(out)
}
