//! Tests for FilingFrame column-kind tracking.

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};

use filings_model::ColumnKind;
use filings_transform::FilingFrame;

#[test]
fn untagged_columns_read_as_raw() {
    let data = DataFrame::new(vec![Series::new("cusip".into(), vec!["A"]).into()]).unwrap();
    let frame = FilingFrame::new("holdings", data);
    assert_eq!(frame.kind("cusip"), ColumnKind::Raw);
    assert_eq!(frame.kind("no_such_column"), ColumnKind::Raw);
}

#[test]
fn native_date_dtype_reads_as_date() {
    let dates = Series::new("date".into(), vec![0i32])
        .cast(&DataType::Date)
        .unwrap();
    let data = DataFrame::new(vec![dates.into()]).unwrap();
    let frame = FilingFrame::new("filings", data);
    assert_eq!(frame.kind("date"), ColumnKind::Date);
}

#[test]
fn explicit_tag_wins_over_dtype() {
    let data = DataFrame::new(vec![Series::new("q".into(), vec!["2020Q1"]).into()]).unwrap();
    let mut frame = FilingFrame::new("axis", data);
    frame.set_kind("q", ColumnKind::Quarter);
    assert_eq!(frame.kind("q"), ColumnKind::Quarter);
    assert_eq!(frame.height(), 1);
    assert!(frame.has_column("q"));
}
