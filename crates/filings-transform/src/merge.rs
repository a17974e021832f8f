//! Key-uniqueness checking and duplicate-safe left joins.

use std::collections::BTreeSet;

use polars::prelude::{
    AnyValue, Column, DataFrame, Expr, IntoLazy, JoinArgs, JoinType, MaintainOrderJoin, col,
};

use crate::data_utils::any_to_key;
use crate::error::{NormalizeError, Result};

/// Check whether any two rows of `df` collide on the given key.
///
/// `key_columns` of `None` (or an empty slice) means the whole row tuple.
/// Rows are scanned in their existing order and the scan short-circuits on
/// the first collision, so the result is deterministic with respect to row
/// order. Zero-row tables have no duplicates. The table is only read.
pub fn has_duplicates(df: &DataFrame, key_columns: Option<&[String]>) -> Result<bool> {
    let columns = key_projection(df, key_columns)?;
    let mut seen = BTreeSet::new();
    for idx in 0..df.height() {
        // Keyed as a tuple of fragments, so a fragment containing any
        // would-be separator cannot alias across adjacent key columns.
        let key: Vec<String> = columns
            .iter()
            .map(|column| any_to_key(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        if !seen.insert(key) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Left-join `right` onto `left` by `key_columns`, refusing to run a join
/// that would duplicate rows.
///
/// The right table is checked for key uniqueness before any join is
/// attempted; a violation fails with [`NormalizeError::DuplicateKey`]
/// naming `label`. After the join the row count must still equal `left`'s
/// (a fan-out here means the key check was defeated, e.g. by a type
/// mismatch between the two tables) or the call fails with
/// [`NormalizeError::MergeCardinality`]. No partial result is returned on
/// either failure.
pub fn left_merge_safe(
    left: &DataFrame,
    right: &DataFrame,
    key_columns: &[String],
    label: &str,
) -> Result<DataFrame> {
    if key_columns.is_empty() {
        return Err(NormalizeError::EmptyKey);
    }
    for name in key_columns {
        for df in [left, right] {
            if df.column(name).is_err() {
                return Err(NormalizeError::ColumnNotFound {
                    column: name.clone(),
                });
            }
        }
    }

    if has_duplicates(right, Some(key_columns))? {
        return Err(NormalizeError::DuplicateKey {
            label: label.to_string(),
            key: key_columns.to_vec(),
        });
    }

    let on: Vec<Expr> = key_columns.iter().map(|name| col(name.as_str())).collect();
    // Left row order is part of the contract; the join must not reorder.
    let mut args = JoinArgs::new(JoinType::Left);
    args.maintain_order = MaintainOrderJoin::Left;
    let joined = left
        .clone()
        .lazy()
        .join(right.clone().lazy(), on.clone(), on, args)
        .collect()?;

    if joined.height() != left.height() {
        return Err(NormalizeError::MergeCardinality {
            label: label.to_string(),
            expected: left.height(),
            actual: joined.height(),
        });
    }
    Ok(joined)
}

/// Resolve the key columns to scan, defaulting to every column.
fn key_projection<'a>(
    df: &'a DataFrame,
    key_columns: Option<&[String]>,
) -> Result<Vec<&'a Column>> {
    match key_columns {
        Some(names) if !names.is_empty() => names
            .iter()
            .map(|name| {
                df.column(name).map_err(|_| NormalizeError::ColumnNotFound {
                    column: name.clone(),
                })
            })
            .collect(),
        _ => Ok(df.get_columns().iter().collect()),
    }
}
