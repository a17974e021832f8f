//! Fiscal-quarter bucketing of date-like columns.

use polars::prelude::{AnyValue, NamedFrom, Series};

use filings_model::{ColumnKind, DateErrorPolicy, FiscalQuarter};

use crate::data_utils::any_to_date;
use crate::error::{NormalizeError, Result};
use crate::frame::FilingFrame;
use crate::normalization::datetime::{DateOutcome, parse_column_dates};

/// Convert a column to the fiscal-quarter representation.
///
/// A column already in quarter representation is returned unchanged and
/// the call reports [`DateOutcome::AlreadyNormalized`]. A date column is
/// bucketed directly; a raw column goes through date parsing first, under
/// the same permissive/strict policy as [`normalize_date`], then each date
/// is bucketed into its containing quarter.
///
/// [`normalize_date`]: crate::normalization::normalize_date
pub fn normalize_quarter(
    frame: &mut FilingFrame,
    column: &str,
    policy: DateErrorPolicy,
) -> Result<DateOutcome> {
    let (quarters, coerced) = match frame.kind(column) {
        ColumnKind::Quarter => {
            tracing::debug!(frame = %frame.name, column, "column already in quarter representation");
            return Ok(DateOutcome::AlreadyNormalized);
        }
        ColumnKind::Date => (date_column_quarters(frame, column)?, 0),
        ColumnKind::Raw => {
            let (dates, coerced) = parse_column_dates(frame, column, policy)?;
            let quarters = dates
                .iter()
                .map(|date| date.map(|d| FiscalQuarter::from_date(d).to_string()))
                .collect();
            (quarters, coerced)
        }
    };

    let series = Series::new(column.into(), quarters);
    frame.data.with_column(series)?;
    frame.set_kind(column, ColumnKind::Quarter);
    Ok(DateOutcome::Converted { coerced })
}

/// Bucket each cell of a native date column, preserving nulls.
fn date_column_quarters(frame: &FilingFrame, column: &str) -> Result<Vec<Option<String>>> {
    let source = frame
        .data
        .column(column)
        .map_err(|_| NormalizeError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let mut quarters = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let value = source.get(idx).unwrap_or(AnyValue::Null);
        quarters.push(any_to_date(value).map(|d| FiscalQuarter::from_date(d).to_string()));
    }
    Ok(quarters)
}
