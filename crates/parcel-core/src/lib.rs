//! # parcel-core: Shipping Price Engine
//!
//! This crate holds everything needed to turn a measured package into a
//! shipping price. It has no knowledge of how measurements are collected or
//! how prices are shown; the `parcel` CLI is one such front end.
//!
//! ## Pipeline
//!
//! 1. [`CostTable::load()`] reads five tier prices from the first line of a
//!    `;`-separated file.
//! 2. [`Package::canonicalize()`] sorts the dimensions into descending
//!    order, producing a [`CanonicalPackage`].
//! 3. [`CanonicalPackage::validate()`] rejects zero, negative and oversized
//!    values.
//! 4. [`classify()`] picks the first [`Tier`] whose limits admit the package.
//! 5. The tier's column of the cost table is the price.
//!
//! [`quote()`] runs steps 2 to 5 against a loaded table; [`quote_from_path()`]
//! runs all five.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Prices are [`rust_decimal::Decimal`], never floats.
//! - Canonicalization returns a new value; caller data is never mutated.

pub mod error;
pub mod package;
pub mod pricing;
pub mod table;
pub mod tier;

// Re-export primary types for ergonomic imports.
pub use error::{PackageError, ParcelError, TableError};
pub use package::{
    CanonicalPackage, Package, MAX_HEIGHT_MM, MAX_LENGTH_MM, MAX_WEIGHT_G, MAX_WIDTH_MM,
};
pub use pricing::{classify, quote, quote_from_path, Quote};
pub use table::CostTable;
pub use tier::{Tier, TierLimits, LARGE_GIRTH_LIMIT_MM, TIER_COUNT};
