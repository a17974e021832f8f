//! Calendar-date parsing and column normalization.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{AnyValue, DataType, NamedFrom, Series};

use filings_model::{ColumnKind, DateErrorPolicy, FiscalQuarter};

use crate::data_utils::{any_to_date, any_to_string};
use crate::error::{NormalizeError, Result};
use crate::frame::FilingFrame;

/// Result of normalizing a date-like column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    /// The column was already in the requested representation; nothing
    /// was touched.
    AlreadyNormalized,
    /// The column was converted. `coerced` counts the values that were
    /// nulled out under the permissive policy (always zero under strict).
    Converted { coerced: usize },
}

/// Parse a date value from its string form.
///
/// Accepts ISO dates, the compact `YYYYMMDD` form filings ship with,
/// slash-separated forms, datetime strings (truncated to the date), and
/// `YYYYQn` quarter designators (mapped to the quarter's first day).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_formats = [
        "%Y-%m-%d",
        "%Y%m%d", // compact form used by filing indexes
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%b-%Y",
    ];
    for fmt in &date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in &datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    FiscalQuarter::parse(trimmed).and_then(|quarter| quarter.first_day())
}

/// Convert a raw column to the calendar-date representation.
///
/// A column already in date representation is returned unchanged and the
/// call reports [`DateOutcome::AlreadyNormalized`]. A quarter column is a
/// structural mismatch. Otherwise every value is parsed via its string
/// form; unparsable values become null under [`DateErrorPolicy::Coerce`]
/// and fail the whole column under [`DateErrorPolicy::Strict`].
pub fn normalize_date(
    frame: &mut FilingFrame,
    column: &str,
    policy: DateErrorPolicy,
) -> Result<DateOutcome> {
    match frame.kind(column) {
        ColumnKind::Date => {
            tracing::debug!(frame = %frame.name, column, "column already in date representation");
            return Ok(DateOutcome::AlreadyNormalized);
        }
        ColumnKind::Quarter => {
            return Err(NormalizeError::TypeMismatch {
                column: column.to_string(),
                requested: "date".to_string(),
                found: ColumnKind::Quarter,
            });
        }
        ColumnKind::Raw => {}
    }

    let (dates, coerced) = parse_column_dates(frame, column, policy)?;
    let days: Vec<Option<i32>> = dates
        .iter()
        .map(|date| date.map(days_from_epoch))
        .collect();
    let series = Series::new(column.into(), days).cast(&DataType::Date)?;
    frame.data.with_column(series)?;
    frame.set_kind(column, ColumnKind::Date);
    Ok(DateOutcome::Converted { coerced })
}

/// Parse every cell of a raw column to a date under the given policy.
///
/// Shared by the date and quarter normalizers; nulls pass through as nulls
/// and never count as failures. Cells that already carry a temporal value
/// (a native `Date` or `Datetime` dtype) convert directly, a `Datetime`
/// truncating to its date; everything else goes through its string form.
pub(crate) fn parse_column_dates(
    frame: &FilingFrame,
    column: &str,
    policy: DateErrorPolicy,
) -> Result<(Vec<Option<NaiveDate>>, usize)> {
    let source = frame
        .data
        .column(column)
        .map_err(|_| NormalizeError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let mut dates: Vec<Option<NaiveDate>> = Vec::with_capacity(frame.height());
    let mut failures = 0usize;
    let mut sample = String::new();
    for idx in 0..frame.height() {
        match source.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => dates.push(None),
            value => {
                if let Some(date) = any_to_date(value.clone()) {
                    dates.push(Some(date));
                    continue;
                }
                let text = any_to_string(value);
                match parse_date(&text) {
                    Some(date) => dates.push(Some(date)),
                    None => {
                        if failures == 0 {
                            sample = text;
                        }
                        failures += 1;
                        dates.push(None);
                    }
                }
            }
        }
    }
    if failures > 0 && policy == DateErrorPolicy::Strict {
        return Err(NormalizeError::DateParse {
            column: column.to_string(),
            failures,
            sample,
        });
    }
    Ok((dates, failures))
}

/// Physical `Date` cells count days from the Unix epoch.
pub(crate) fn days_from_epoch(date: NaiveDate) -> i32 {
    const EPOCH: NaiveDate = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    (date - EPOCH).num_days() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_filing_forms() {
        let expected = NaiveDate::from_ymd_opt(2020, 3, 31).unwrap();
        assert_eq!(parse_date("2020-03-31"), Some(expected));
        assert_eq!(parse_date("20200331"), Some(expected));
        assert_eq!(parse_date("03/31/2020"), Some(expected));
        assert_eq!(parse_date("2020-03-31 12:00:00"), Some(expected));
    }

    #[test]
    fn parses_quarter_designator_as_quarter_start() {
        assert_eq!(
            parse_date("2020Q2"),
            NaiveDate::from_ymd_opt(2020, 4, 1)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2020-13-01"), None);
    }

    #[test]
    fn epoch_day_arithmetic() {
        assert_eq!(days_from_epoch(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), 0);
        assert_eq!(days_from_epoch(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()), 18276);
    }
}
