//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout the Parcel Rate Stack. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Cost table errors point at the deployment: the file is missing,
//!   empty, or does not hold five prices.
//! - Package errors point at the input: they name the offending field
//!   and the value that was rejected.
//! - [`ParcelError`] keeps the two apart so a caller can tell the user
//!   whether to fix the input or fix the installation.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a pricing request.
#[derive(Error, Debug)]
pub enum ParcelError {
    /// The cost table could not be loaded.
    #[error("cost table error: {0}")]
    Table(#[from] TableError),

    /// The package failed validation.
    #[error("package error: {0}")]
    Package(#[from] PackageError),
}

impl ParcelError {
    /// Returns `true` if the failure lies with the supplied package rather
    /// than with the cost table.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Package(_))
    }
}

/// Error while loading a cost table file.
#[derive(Error, Debug)]
pub enum TableError {
    /// No file exists at the configured path.
    #[error("CSV file not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The file exists but has no first line.
    #[error("CSV file is empty: {}", path.display())]
    Empty {
        /// The path of the empty file.
        path: PathBuf,
    },

    /// The first line is not exactly five non-negative decimals.
    #[error("CSV file has the wrong format: {reason}")]
    Malformed {
        /// What was wrong with the line.
        reason: String,
    },

    /// The file exists but could not be read.
    #[error("failed to read CSV file {}: {source}", path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Error in package validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackageError {
    /// A dimension or the weight is zero or negative.
    #[error("the packet must not consist of negative values or zeros: {field} = {value}")]
    NonPositiveValue {
        /// The field that was rejected (`length`, `width`, `height`, `weight`).
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A dimension or the weight exceeds the outer bound of the largest tier.
    #[error("the package dimensions are out of bounds: {field} = {value} exceeds {limit}")]
    OutOfRange {
        /// The field that was rejected.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// The inclusive upper bound for the field.
        limit: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_error_wraps_into_parcel_error() {
        let err: ParcelError = PackageError::NonPositiveValue {
            field: "weight",
            value: 0,
        }
        .into();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("weight = 0"));
    }

    #[test]
    fn table_error_is_not_input_error() {
        let err: ParcelError = TableError::Empty {
            path: PathBuf::from("costs.csv"),
        }
        .into();
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("CSV file is empty"));
    }

    #[test]
    fn out_of_range_message_names_limit() {
        let err = PackageError::OutOfRange {
            field: "length",
            value: 1201,
            limit: 1200,
        };
        assert_eq!(
            err.to_string(),
            "the package dimensions are out of bounds: length = 1201 exceeds 1200"
        );
    }
}
