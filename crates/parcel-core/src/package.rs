//! # Package Model
//!
//! A [`Package`] is what the caller measured: three dimensions in
//! millimetres and a weight in grams, in whatever axis order the caller
//! chose. Pricing never looks at it directly. It first derives a
//! [`CanonicalPackage`], whose dimensions are sorted so that
//! `length >= width >= height`, and every bound check and tier predicate
//! runs against that value.
//!
//! Values are signed so that zero and negative input reach validation and
//! come back as [`PackageError::NonPositiveValue`] instead of being lost
//! at a type boundary.

use serde::{Deserialize, Serialize};

use crate::error::PackageError;

/// Outer bound on the longest side, in millimetres.
pub const MAX_LENGTH_MM: i64 = 1200;
/// Outer bound on the middle side, in millimetres.
pub const MAX_WIDTH_MM: i64 = 600;
/// Outer bound on the shortest side, in millimetres.
pub const MAX_HEIGHT_MM: i64 = 600;
/// Outer bound on the weight, in grams.
pub const MAX_WEIGHT_G: i64 = 31_000;

/// A package as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    /// Length in millimetres.
    pub length: i64,
    /// Width in millimetres.
    pub width: i64,
    /// Height in millimetres.
    pub height: i64,
    /// Weight in grams.
    pub weight: i64,
}

impl Package {
    /// Create a package from raw measurements (mm, mm, mm, g).
    pub fn new(length: i64, width: i64, height: i64, weight: i64) -> Self {
        Self {
            length,
            width,
            height,
            weight,
        }
    }

    /// Sort the dimensions into descending order.
    ///
    /// Returns a new value; `self` is left as the caller supplied it. The
    /// weight is carried over unchanged.
    pub fn canonicalize(&self) -> CanonicalPackage {
        let mut dims = [self.length, self.width, self.height];
        dims.sort_unstable_by(|a, b| b.cmp(a));
        CanonicalPackage {
            length: dims[0],
            width: dims[1],
            height: dims[2],
            weight: self.weight,
        }
    }
}

/// A package whose dimensions are in descending order.
///
/// Only constructible through [`Package::canonicalize()`], so
/// `length >= width >= height` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalPackage {
    length: i64,
    width: i64,
    height: i64,
    weight: i64,
}

impl CanonicalPackage {
    /// Longest side in millimetres.
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Middle side in millimetres.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Shortest side in millimetres.
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Weight in grams.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Belt measurement: `length + 2 * width + 2 * height`.
    ///
    /// Saturates rather than overflowing on unvalidated input.
    pub fn girth(&self) -> i64 {
        self.length
            .saturating_add(self.width.saturating_mul(2))
            .saturating_add(self.height.saturating_mul(2))
    }

    /// Check every value is positive and within the outer bounds.
    ///
    /// All fields are checked for positivity before any field is checked
    /// against its upper bound, so a package that is both too long and has
    /// a zero weight reports the zero.
    ///
    /// # Errors
    ///
    /// - [`PackageError::NonPositiveValue`] if any value is `<= 0`.
    /// - [`PackageError::OutOfRange`] if any value exceeds its bound.
    pub fn validate(&self) -> Result<(), PackageError> {
        for (field, value) in self.fields() {
            if value <= 0 {
                return Err(PackageError::NonPositiveValue { field, value });
            }
        }

        let limits = [MAX_LENGTH_MM, MAX_WIDTH_MM, MAX_HEIGHT_MM, MAX_WEIGHT_G];
        for ((field, value), limit) in self.fields().into_iter().zip(limits) {
            if value > limit {
                return Err(PackageError::OutOfRange {
                    field,
                    value,
                    limit,
                });
            }
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, i64); 4] {
        [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("weight", self.weight),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_sorts_descending() {
        let canon = Package::new(120, 250, 250, 750).canonicalize();
        assert_eq!(canon.length(), 250);
        assert_eq!(canon.width(), 250);
        assert_eq!(canon.height(), 120);
        assert_eq!(canon.weight(), 750);
    }

    #[test]
    fn canonicalize_leaves_caller_value_untouched() {
        let pkg = Package::new(150, 300, 200, 900);
        let canon = pkg.canonicalize();
        assert_eq!(pkg, Package::new(150, 300, 200, 900));
        assert_eq!((canon.length(), canon.width(), canon.height()), (300, 200, 150));
    }

    #[test]
    fn weight_is_never_reordered() {
        let canon = Package::new(1, 2, 3, 5000).canonicalize();
        assert_eq!(canon.weight(), 5000);
        assert_eq!(canon.length(), 3);
    }

    #[test]
    fn girth_uses_canonical_dimensions() {
        let canon = Package::new(600, 1200, 600, 1).canonicalize();
        assert_eq!(canon.girth(), 1200 + 2 * 600 + 2 * 600);
    }

    #[test]
    fn validate_accepts_outer_bounds() {
        let canon = Package::new(1200, 600, 600, 31_000).canonicalize();
        assert!(canon.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero() {
        let err = Package::new(0, 0, 0, 0).canonicalize().validate().unwrap_err();
        assert!(matches!(err, PackageError::NonPositiveValue { .. }));
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let err = Package::new(10, 10, 10, -5)
            .canonicalize()
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            PackageError::NonPositiveValue {
                field: "weight",
                value: -5
            }
        );
    }

    #[test]
    fn validate_reports_non_positive_before_out_of_range() {
        let err = Package::new(5000, 10, 10, 0)
            .canonicalize()
            .validate()
            .unwrap_err();
        assert!(matches!(err, PackageError::NonPositiveValue { field: "weight", .. }));
    }

    #[test]
    fn validate_rejects_each_axis_over_bound() {
        let cases = [
            (Package::new(1201, 10, 10, 10), "length"),
            (Package::new(1200, 601, 10, 10), "width"),
            (Package::new(601, 601, 601, 10), "width"),
            (Package::new(10, 10, 10, 31_001), "weight"),
        ];
        for (pkg, expected) in cases {
            match pkg.canonicalize().validate() {
                Err(PackageError::OutOfRange { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected OutOfRange for {pkg:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn height_bound_applies_after_sorting() {
        // Sorted to (700, 650, 601): width trips first.
        let err = Package::new(601, 650, 700, 10)
            .canonicalize()
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            PackageError::OutOfRange {
                field: "width",
                value: 650,
                limit: MAX_WIDTH_MM
            }
        );
    }
}
