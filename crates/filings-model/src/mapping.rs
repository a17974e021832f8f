//! Schema-mapping configuration for bulk column casting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{DateKind, ScalarType};

/// The target schema for a table: a column-to-type mapping for scalar
/// columns and a separate one for date-like columns.
///
/// Mappings are value types: overriding the defaults for one call never
/// affects any other call. Columns absent from a table are skipped by the
/// caster, so one mapping can serve tables with different column subsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMapping {
    /// Column name to scalar target type.
    pub scalar: BTreeMap<String, ScalarType>,
    /// Column name to date-like target representation.
    pub date: BTreeMap<String, DateKind>,
}

impl SchemaMapping {
    /// An empty mapping; the caster leaves every column untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default mapping for filing tables: security and filer identifiers,
    /// share counts, and the reporting-period columns.
    pub fn filing_defaults() -> Self {
        let mut scalar = BTreeMap::new();
        scalar.insert("cusip".to_string(), ScalarType::Text);
        scalar.insert("cik".to_string(), ScalarType::NullableInteger);
        scalar.insert("shares".to_string(), ScalarType::Integer);

        let mut date = BTreeMap::new();
        date.insert("quarter".to_string(), DateKind::Quarter);
        date.insert("date".to_string(), DateKind::Date);

        Self { scalar, date }
    }

    /// Add or replace a scalar column entry.
    pub fn with_scalar(mut self, column: impl Into<String>, target: ScalarType) -> Self {
        self.scalar.insert(column.into(), target);
        self
    }

    /// Add or replace a date-like column entry.
    pub fn with_date(mut self, column: impl Into<String>, kind: DateKind) -> Self {
        self.date.insert(column.into(), kind);
        self
    }
}
