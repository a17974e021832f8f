//! Tests for fiscal-quarter column normalization.

use polars::prelude::{AnyValue, DataFrame, DataType, NamedFrom, Series};

use filings_model::{ColumnKind, DateErrorPolicy};
use filings_transform::{DateOutcome, FilingFrame, normalize_date, normalize_quarter};

fn raw_frame(values: Vec<Option<&str>>) -> FilingFrame {
    let data = DataFrame::new(vec![Series::new("quarter".into(), values).into()]).unwrap();
    FilingFrame::new("filings", data)
}

#[test]
fn buckets_raw_date_strings() {
    let mut frame = raw_frame(vec![Some("2020-03-31"), Some("2020-10-01"), None]);
    let outcome = normalize_quarter(&mut frame, "quarter", DateErrorPolicy::Coerce).unwrap();
    assert_eq!(outcome, DateOutcome::Converted { coerced: 0 });
    assert_eq!(frame.kind("quarter"), ColumnKind::Quarter);

    let column = frame.data.column("quarter").unwrap();
    assert_eq!(column.get(0).unwrap(), AnyValue::String("2020Q1"));
    assert_eq!(column.get(1).unwrap(), AnyValue::String("2020Q4"));
    assert_eq!(column.get(2).unwrap(), AnyValue::Null);
}

#[test]
fn buckets_quarter_designator_strings() {
    let mut frame = raw_frame(vec![Some("1999Q4")]);
    normalize_quarter(&mut frame, "quarter", DateErrorPolicy::Strict).unwrap();
    let column = frame.data.column("quarter").unwrap();
    assert_eq!(column.get(0).unwrap(), AnyValue::String("1999Q4"));
}

#[test]
fn buckets_an_already_normalized_date_column() {
    let mut frame = raw_frame(vec![Some("2020-06-15")]);
    normalize_date(&mut frame, "quarter", DateErrorPolicy::Strict).unwrap();
    assert_eq!(frame.data.column("quarter").unwrap().dtype(), &DataType::Date);

    let outcome = normalize_quarter(&mut frame, "quarter", DateErrorPolicy::Strict).unwrap();
    assert_eq!(outcome, DateOutcome::Converted { coerced: 0 });
    let column = frame.data.column("quarter").unwrap();
    assert_eq!(column.get(0).unwrap(), AnyValue::String("2020Q2"));
}

#[test]
fn second_application_is_a_noop() {
    let mut frame = raw_frame(vec![Some("2020-03-31")]);
    normalize_quarter(&mut frame, "quarter", DateErrorPolicy::Coerce).unwrap();
    let snapshot = frame.data.clone();

    let outcome = normalize_quarter(&mut frame, "quarter", DateErrorPolicy::Coerce).unwrap();
    assert_eq!(outcome, DateOutcome::AlreadyNormalized);
    assert!(frame.data.equals_missing(&snapshot));
}

#[test]
fn coerce_policy_counts_nulled_values() {
    let mut frame = raw_frame(vec![Some("2020-03-31"), Some("n/a")]);
    let outcome = normalize_quarter(&mut frame, "quarter", DateErrorPolicy::Coerce).unwrap();
    assert_eq!(outcome, DateOutcome::Converted { coerced: 1 });
    assert_eq!(frame.data.column("quarter").unwrap().null_count(), 1);
}
