//! # Pricing Engine
//!
//! Turns a [`Package`] and a [`CostTable`] into a [`Quote`]:
//!
//! 1. Canonicalize: sort the dimensions so `length >= width >= height`.
//! 2. Validate: every value positive, none above the outer bounds
//!    (1200 x 600 x 600 mm, 31000 g).
//! 3. Classify: the first tier in [`Tier::ALL`] whose limits admit the
//!    canonical package.
//! 4. Price: the table entry for that tier.
//!
//! A package that clears step 2 always lands in a tier. The large/heavy
//! tier's limits are exactly the outer bounds, so anything the lighter
//! tiers reject (for instance girth above 3000 mm) falls through to it.
//!
//! The engine performs no I/O. [`quote_from_path()`] is the one entry point
//! that reads the table from disk on the caller's behalf.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PackageError, ParcelError};
use crate::package::{CanonicalPackage, Package};
use crate::table::CostTable;
use crate::tier::Tier;

/// The outcome of pricing one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// The tier the package was classified into.
    pub tier: Tier,
    /// The price of that tier.
    pub price: Decimal,
    /// The package with its dimensions sorted.
    pub package: CanonicalPackage,
    /// Belt measurement of the canonical package, mm.
    pub girth: i64,
}

/// Assign a tier to an already validated canonical package.
///
/// Input that has not passed [`CanonicalPackage::validate()`] is still
/// classified, but the result only carries meaning for valid packages.
pub fn classify(pkg: &CanonicalPackage) -> Tier {
    Tier::ALL
        .into_iter()
        .find(|tier| tier.limits().admits(pkg))
        .unwrap_or(Tier::LargeHeavy)
}

/// Price `package` against `table`.
///
/// # Errors
///
/// - [`PackageError::NonPositiveValue`] if a dimension or the weight is `<= 0`.
/// - [`PackageError::OutOfRange`] if a canonical dimension or the weight
///   exceeds its outer bound.
pub fn quote(package: &Package, table: &CostTable) -> Result<Quote, PackageError> {
    let canonical = package.canonicalize();
    canonical.validate()?;

    let tier = classify(&canonical);
    let girth = canonical.girth();
    tracing::debug!(
        length = canonical.length(),
        width = canonical.width(),
        height = canonical.height(),
        weight = canonical.weight(),
        girth,
        %tier,
        "classified package"
    );

    Ok(Quote {
        tier,
        price: table.price(tier),
        package: canonical,
        girth,
    })
}

/// Load the cost table at `path` and price `package` against it.
///
/// The table is read fresh on every call. Table and package failures stay
/// distinct in the returned [`ParcelError`].
///
/// # Errors
///
/// - [`ParcelError::Table`] if the table cannot be loaded.
/// - [`ParcelError::Package`] if the package fails validation.
pub fn quote_from_path(package: &Package, path: impl AsRef<Path>) -> Result<Quote, ParcelError> {
    let table = CostTable::load(path)?;
    Ok(quote(package, &table)?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn standard_table() -> CostTable {
        "3.89;4.39;5.89;7.99;14.99".parse().unwrap()
    }

    /// Any package inside the outer bounds. At most one side exceeds 600,
    /// so sorting can never push a value past its bound.
    fn valid_package() -> impl Strategy<Value = Package> {
        (1i64..=1200, 1i64..=600, 1i64..=600, 1i64..=31_000)
            .prop_map(|(l, w, h, g)| Package::new(l, w, h, g))
    }

    proptest! {
        /// Axis order never changes the quote.
        #[test]
        fn quote_is_permutation_invariant(pkg in valid_package()) {
            let table = standard_table();
            let base = quote(&pkg, &table).unwrap();
            let perms = [
                Package::new(pkg.width, pkg.length, pkg.height, pkg.weight),
                Package::new(pkg.height, pkg.width, pkg.length, pkg.weight),
                Package::new(pkg.length, pkg.height, pkg.width, pkg.weight),
                Package::new(pkg.width, pkg.height, pkg.length, pkg.weight),
                Package::new(pkg.height, pkg.length, pkg.width, pkg.weight),
            ];
            for perm in perms {
                prop_assert_eq!(quote(&perm, &table).unwrap(), base.clone());
            }
        }

        /// Everything within the small limits, in any order, is small.
        #[test]
        fn small_envelope_always_prices_small(
            a in 1i64..=300, b in 1i64..=300, c in 1i64..=150, g in 1i64..=1000,
        ) {
            let table = standard_table();
            for pkg in [
                Package::new(a, b, c, g),
                Package::new(c, a, b, g),
                Package::new(b, c, a, g),
            ] {
                let q = quote(&pkg, &table).unwrap();
                prop_assert_eq!(q.tier, Tier::Small);
                prop_assert_eq!(q.price, table.price(Tier::Small));
            }
        }

        /// Validated packages are always admitted by the tier they get.
        #[test]
        fn classified_tier_admits_package(pkg in valid_package()) {
            let canonical = pkg.canonicalize();
            let tier = classify(&canonical);
            prop_assert!(tier.limits().admits(&canonical));
        }

        /// Any zero or negative value is rejected as non-positive.
        #[test]
        fn non_positive_values_rejected(
            good in 1i64..=600,
            bad in -10_000i64..=0,
            slot in 0usize..4,
        ) {
            let mut vals = [good; 4];
            vals[slot] = bad;
            let pkg = Package::new(vals[0], vals[1], vals[2], vals[3]);
            let err = quote(&pkg, &standard_table()).unwrap_err();
            let is_non_positive = matches!(err, PackageError::NonPositiveValue { .. });
            prop_assert!(is_non_positive);
        }

        /// A side longer than 1200 mm on any axis, or a weight above
        /// 31000 g, is rejected as out of range.
        #[test]
        fn over_bound_values_rejected(
            l in 1i64..=1200, w in 1i64..=600, h in 1i64..=600, g in 1i64..=31_000,
            excess in 1i64..=10_000,
            slot in 0usize..4,
        ) {
            let mut vals = [l, w, h, g];
            let limits = [1200, 1200, 1200, 31_000];
            vals[slot] = limits[slot] + excess;
            let pkg = Package::new(vals[0], vals[1], vals[2], vals[3]);
            let err = quote(&pkg, &standard_table()).unwrap_err();
            let is_out_of_range = matches!(err, PackageError::OutOfRange { .. });
            prop_assert!(is_out_of_range);
        }
    }
}
