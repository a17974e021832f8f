//! Semantic type tags for table columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target scalar type for a non-date column conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarType {
    /// Every value becomes its string form.
    Text,
    /// Every value must parse as an integer; nulls are an error.
    Integer,
    /// Non-null values must parse as integers; nulls are preserved.
    NullableInteger,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Text => "text",
            ScalarType::Integer => "integer",
            ScalarType::NullableInteger => "nullable-integer",
        };
        f.write_str(name)
    }
}

/// Target representation for a date-like column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateKind {
    /// Full calendar date.
    Date,
    /// Fiscal-quarter bucket.
    Quarter,
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateKind::Date => "date",
            DateKind::Quarter => "quarter",
        };
        f.write_str(name)
    }
}

/// Policy for values that fail date parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateErrorPolicy {
    /// Unparsable values become null instead of failing the column.
    #[default]
    Coerce,
    /// Any unparsable value fails the whole column.
    Strict,
}

/// The current date-like representation of a column.
///
/// Carried alongside the data so that "already converted" is an explicit,
/// exhaustively matched state rather than a runtime dtype sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    /// Not yet normalized; values are read through their string form.
    Raw,
    /// Calendar-date representation.
    Date,
    /// Fiscal-quarter bucket representation.
    Quarter,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Raw => "raw",
            ColumnKind::Date => "date",
            ColumnKind::Quarter => "quarter",
        };
        f.write_str(name)
    }
}
