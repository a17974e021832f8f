//! Bulk column casting driven by a schema mapping.

use filings_model::{ColumnKind, DateErrorPolicy, DateKind, SchemaMapping};

use crate::coerce::coerce_column;
use crate::error::Result;
use crate::frame::FilingFrame;
use crate::normalization::{normalize_date, normalize_quarter};

/// Apply a [`SchemaMapping`] to a table: scalar entries go through the
/// coercer, date entries through the normalizers.
///
/// Columns named in the mapping but absent from the table are skipped
/// silently. On a conversion failure the error is logged with its column
/// and target context and then propagated, aborting the call; columns
/// converted before the failure are NOT rolled back (documented caveat).
/// Rows are never added or removed.
pub fn apply_schema(
    frame: &mut FilingFrame,
    mapping: &SchemaMapping,
    date_errors: DateErrorPolicy,
) -> Result<()> {
    for (column, target) in &mapping.scalar {
        if !frame.has_column(column) {
            tracing::debug!(frame = %frame.name, column = %column, "column absent, skipping");
            continue;
        }
        match coerce_column(&frame.data, column, *target) {
            Ok(series) => {
                frame.data.with_column(series)?;
                // A scalar rewrite discards any previous date-like tag.
                frame.set_kind(column.clone(), ColumnKind::Raw);
            }
            Err(err) => {
                tracing::warn!(
                    frame = %frame.name,
                    column = %column,
                    to = %target,
                    error = %err,
                    "column cannot be converted"
                );
                return Err(err);
            }
        }
    }

    for (column, kind) in &mapping.date {
        if !frame.has_column(column) {
            tracing::debug!(frame = %frame.name, column = %column, "column absent, skipping");
            continue;
        }
        let result = match kind {
            DateKind::Date => normalize_date(frame, column, date_errors),
            DateKind::Quarter => normalize_quarter(frame, column, date_errors),
        };
        if let Err(err) = result {
            tracing::warn!(
                frame = %frame.name,
                column = %column,
                to = %kind,
                error = %err,
                "column cannot be normalized"
            );
            return Err(err);
        }
    }

    Ok(())
}
