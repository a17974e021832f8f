//! Error types for filing-table normalization.

use filings_model::ColumnKind;
use thiserror::Error;

/// Errors surfaced by the normalization operations.
///
/// Every failure names the offending column and, where applicable, the
/// target type or key columns, so callers can root-cause without digging.
#[derive(Debug, Error)]
pub enum NormalizeError {
    // === Coercion Errors ===
    /// A value cannot become the requested scalar type.
    #[error("column '{column}' cannot be converted to type {target}")]
    TypeConversion { column: String, target: String },

    /// One or more values failed date parsing under the strict policy.
    #[error("column '{column}': {failures} value(s) not parseable as dates (first: '{sample}')")]
    DateParse {
        column: String,
        failures: usize,
        sample: String,
    },

    /// The operation is structurally inapplicable to the column's current
    /// representation.
    #[error("column '{column}' is in {found} representation, cannot apply {requested} normalization")]
    TypeMismatch {
        column: String,
        requested: String,
        found: ColumnKind,
    },

    // === Merge Errors ===
    /// The right-hand merge table violates key uniqueness.
    #[error("{label}: right table has duplicate rows for key {key:?}")]
    DuplicateKey { label: String, key: Vec<String> },

    /// The join changed the left table's row count.
    #[error("{label}: merge produced {actual} rows, expected {expected}")]
    MergeCardinality {
        label: String,
        expected: usize,
        actual: usize,
    },

    /// A merge was requested without key columns.
    #[error("merge key columns must not be empty")]
    EmptyKey,

    // === Range Errors ===
    /// A quarter range where the end precedes the start.
    #[error("invalid quarter range: '{end}' precedes '{start}'")]
    InvalidRange { start: String, end: String },

    // === DataFrame Errors ===
    /// Column not found in the table.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("dataframe operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for NormalizeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_column_and_target() {
        let err = NormalizeError::TypeConversion {
            column: "shares".to_string(),
            target: "integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'shares' cannot be converted to type integer"
        );
    }

    #[test]
    fn error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("cusip".into());
        let err: NormalizeError = polars_err.into();
        assert!(matches!(err, NormalizeError::DataFrame { .. }));
    }
}
