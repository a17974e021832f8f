//! Frame type pairing a table with its column representations.
//!
//! This module provides [`FilingFrame`], which wraps a Polars DataFrame
//! with a frame name (used in logs and merge error labels) and the
//! date-like representation tag of each normalized column. Carrying the
//! tags alongside the data makes "already converted" an explicit state
//! instead of a dtype sniff, and makes the idempotent no-op branches of
//! the normalizers observable.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType};

use filings_model::ColumnKind;

/// A filing table plus per-column representation tags.
///
/// # Fields
///
/// - `name`: identifies the table in logs and error messages
/// - `data`: the table contents as a Polars DataFrame
#[derive(Debug, Clone)]
pub struct FilingFrame {
    /// Name of the table, e.g. "holdings" or "filers".
    pub name: String,
    /// The table contents.
    pub data: DataFrame,
    kinds: BTreeMap<String, ColumnKind>,
}

impl FilingFrame {
    /// Wrap a DataFrame; every column starts untagged.
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
            kinds: BTreeMap::new(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Whether the table has a column with this name.
    pub fn has_column(&self, column: &str) -> bool {
        self.data.column(column).is_ok()
    }

    /// The current date-like representation of a column.
    ///
    /// An explicit tag wins; an untagged column with a native `Date` dtype
    /// reads as [`ColumnKind::Date`] so tables loaded with date columns
    /// already typed still short-circuit normalization. Everything else is
    /// [`ColumnKind::Raw`].
    pub fn kind(&self, column: &str) -> ColumnKind {
        if let Some(kind) = self.kinds.get(column) {
            return *kind;
        }
        match self.data.column(column) {
            Ok(col) if col.dtype() == &DataType::Date => ColumnKind::Date,
            _ => ColumnKind::Raw,
        }
    }

    /// Record the representation of a column after a conversion.
    pub fn set_kind(&mut self, column: impl Into<String>, kind: ColumnKind) {
        self.kinds.insert(column.into(), kind);
    }
}
