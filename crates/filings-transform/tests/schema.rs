//! Tests for schema-driven bulk casting.

use polars::prelude::{AnyValue, DataFrame, DataType, NamedFrom, Series};

use filings_model::{ColumnKind, DateErrorPolicy, DateKind, ScalarType, SchemaMapping};
use filings_transform::{FilingFrame, NormalizeError, apply_schema};

fn holdings_frame() -> FilingFrame {
    let data = DataFrame::new(vec![
        Series::new("cusip".into(), vec![37833100i64, 59491810]).into(),
        Series::new("cik".into(), vec![Some("320193"), None]).into(),
        Series::new("shares".into(), vec!["1000", "2500"]).into(),
        Series::new("quarter".into(), vec!["2020-03-31", "2020-06-30"]).into(),
        Series::new("note".into(), vec!["a", "b"]).into(),
    ])
    .unwrap();
    FilingFrame::new("holdings", data)
}

#[test]
fn applies_defaults_across_the_table() {
    let mut frame = holdings_frame();
    let before = frame.height();
    apply_schema(
        &mut frame,
        &SchemaMapping::filing_defaults(),
        DateErrorPolicy::Coerce,
    )
    .unwrap();

    assert_eq!(frame.height(), before);
    assert_eq!(frame.data.column("cusip").unwrap().dtype(), &DataType::String);
    assert_eq!(frame.data.column("cik").unwrap().dtype(), &DataType::Int64);
    assert_eq!(frame.data.column("cik").unwrap().null_count(), 1);
    assert_eq!(frame.data.column("shares").unwrap().dtype(), &DataType::Int64);
    assert_eq!(frame.kind("quarter"), ColumnKind::Quarter);
    assert_eq!(
        frame.data.column("quarter").unwrap().get(1).unwrap(),
        AnyValue::String("2020Q2")
    );
}

#[test]
fn mapped_but_absent_columns_are_skipped() {
    let mut frame = holdings_frame();
    let mapping = SchemaMapping::new()
        .with_scalar("no_such_column", ScalarType::Integer)
        .with_date("also_missing", DateKind::Date);
    apply_schema(&mut frame, &mapping, DateErrorPolicy::Coerce).unwrap();
    assert!(frame.data.equals_missing(&holdings_frame().data));
}

#[test]
fn unmapped_columns_are_untouched() {
    let mut frame = holdings_frame();
    apply_schema(
        &mut frame,
        &SchemaMapping::filing_defaults(),
        DateErrorPolicy::Coerce,
    )
    .unwrap();
    assert_eq!(frame.data.column("note").unwrap().dtype(), &DataType::String);
    assert_eq!(
        frame.data.column("note").unwrap().get(0).unwrap(),
        AnyValue::String("a")
    );
}

#[test]
fn conversion_failure_aborts_without_rollback() {
    let data = DataFrame::new(vec![
        Series::new("cik".into(), vec![Some("320193"), Some("100")]).into(),
        Series::new("shares".into(), vec!["1000", "many"]).into(),
    ])
    .unwrap();
    let mut frame = FilingFrame::new("holdings", data);

    let err = apply_schema(
        &mut frame,
        &SchemaMapping::filing_defaults(),
        DateErrorPolicy::Coerce,
    )
    .unwrap_err();
    assert!(matches!(err, NormalizeError::TypeConversion { .. }));

    // cik sorts before shares in the mapping, so it was already converted
    // when shares failed; partial application is the documented caveat.
    assert_eq!(frame.data.column("cik").unwrap().dtype(), &DataType::Int64);
    assert_eq!(frame.data.column("shares").unwrap().dtype(), &DataType::String);
}

#[test]
fn strict_date_policy_propagates() {
    let data = DataFrame::new(vec![
        Series::new("date".into(), vec!["2020-01-01", "garbage"]).into(),
    ])
    .unwrap();
    let mut frame = FilingFrame::new("filings", data);

    let err = apply_schema(
        &mut frame,
        &SchemaMapping::filing_defaults(),
        DateErrorPolicy::Strict,
    )
    .unwrap_err();
    assert!(matches!(err, NormalizeError::DateParse { .. }));
}
