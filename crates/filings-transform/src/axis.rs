//! Gap-free fiscal-quarter reference axes.

use polars::prelude::{DataFrame, NamedFrom, Series};

use filings_model::{ColumnKind, FiscalQuarter};

use crate::error::{NormalizeError, Result};
use crate::frame::FilingFrame;
use crate::normalization::parse_date;

/// Produce the contiguous sequence of fiscal quarters from `start` to
/// `end` inclusive, one `YYYYQn` row per quarter under `column_name`.
///
/// Endpoints are quarter designators (`2000Q1`) or any accepted date form,
/// which is bucketed into its containing quarter. The output is strictly
/// increasing with no gaps; `start == end` yields exactly one row. An end
/// that precedes the start fails with [`NormalizeError::InvalidRange`].
pub fn quarter_range(start: &str, end: &str, column_name: &str) -> Result<FilingFrame> {
    let start_quarter = parse_endpoint(start, column_name)?;
    let end_quarter = parse_endpoint(end, column_name)?;
    if end_quarter < start_quarter {
        return Err(NormalizeError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut quarters = Vec::new();
    let mut current = start_quarter;
    quarters.push(current.to_string());
    while current < end_quarter {
        current = current.succ();
        quarters.push(current.to_string());
    }

    let data = DataFrame::new(vec![Series::new(column_name.into(), quarters).into()])?;
    let mut frame = FilingFrame::new("quarter_axis", data);
    frame.set_kind(column_name, ColumnKind::Quarter);
    Ok(frame)
}

fn parse_endpoint(value: &str, column: &str) -> Result<FiscalQuarter> {
    FiscalQuarter::parse(value)
        .or_else(|| parse_date(value).map(FiscalQuarter::from_date))
        .ok_or_else(|| NormalizeError::DateParse {
            column: column.to_string(),
            failures: 1,
            sample: value.to_string(),
        })
}
