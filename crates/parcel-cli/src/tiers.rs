//! # Tiers Subcommand
//!
//! Prints the published tariff: the size, weight and belt limits of each
//! tier next to its current price. When the cost table cannot be loaded the
//! limits are still shown, with `?` in place of each price.

use anyhow::Result;
use clap::Args;

use parcel_core::{CostTable, Tier, TierLimits};

use crate::config::Settings;
use crate::format_price;

/// Arguments for the tiers subcommand.
#[derive(Args, Debug)]
pub struct TiersArgs {}

/// One printable row of the tier overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRow {
    /// Largest admitted dimensions, e.g. `up to 300x300x150`.
    pub size: String,
    /// Heaviest admitted weight, e.g. `up to 1000g`.
    pub weight: String,
    /// Girth limit in centimetres, or `-` when the tier has none.
    pub girth: String,
    /// Formatted price, or `?` when no cost table could be loaded.
    pub price: String,
}

impl TierRow {
    fn new(limits: &TierLimits, price: String) -> Self {
        Self {
            size: format!(
                "up to {}x{}x{}",
                limits.max_length, limits.max_width, limits.max_height
            ),
            weight: format!("up to {}g", limits.max_weight),
            // Belt size is published in centimetres.
            girth: match limits.max_girth {
                Some(mm) => format!("up to {}cm", mm / 10),
                None => "-".to_string(),
            },
            price,
        }
    }
}

/// Build the overview rows, one per tier in table order.
pub fn tier_rows(table: Option<&CostTable>, currency_symbol: &str) -> Vec<TierRow> {
    Tier::ALL
        .iter()
        .map(|tier| {
            let price = match table {
                Some(t) => format_price(t.price(*tier), currency_symbol),
                None => "?".to_string(),
            };
            TierRow::new(&tier.limits(), price)
        })
        .collect()
}

/// Execute the tiers subcommand.
pub fn run_tiers(_args: &TiersArgs, settings: &Settings) -> Result<u8> {
    let table = match CostTable::load(&settings.cost_table) {
        Ok(table) => Some(table),
        Err(e) => {
            tracing::warn!(error = %e, "error while loading the price list");
            None
        }
    };

    println!(
        "{:<20} {:<20} {:<16} {}",
        "Package size [mm]", "Package weight [g]", "Belt size [cm]", "Shipping costs"
    );
    for row in tier_rows(table.as_ref(), &settings.currency_symbol) {
        println!(
            "{:<20} {:<20} {:<16} {}",
            row.size, row.weight, row.girth, row.price
        );
    }
    Ok(0)
}
