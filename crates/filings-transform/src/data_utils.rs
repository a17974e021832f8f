//! Value extraction utilities for Polars tables.
//!
//! Helpers for reading `AnyValue` cells through their string or numeric
//! form, which is how every per-column conversion in this crate walks a
//! table.

use chrono::{DateTime, NaiveDate, TimeDelta};
use polars::prelude::{AnyValue, DataFrame, TimeUnit};

use crate::error::{NormalizeError, Result};

/// Converts a Polars `AnyValue` to its string form.
///
/// Returns an empty string for `Null`. Date cells render in ISO
/// `YYYY-MM-DD` form so they survive a text round-trip.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Int8(value) => value.to_string(),
        AnyValue::Int16(value) => value.to_string(),
        AnyValue::Int32(value) => value.to_string(),
        AnyValue::Int64(value) => value.to_string(),
        AnyValue::UInt8(value) => value.to_string(),
        AnyValue::UInt16(value) => value.to_string(),
        AnyValue::UInt32(value) => value.to_string(),
        AnyValue::UInt64(value) => value.to_string(),
        AnyValue::Date(days) => match date_from_days(days) {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => String::new(),
        },
        value => value.to_string(),
    }
}

/// Converts an `AnyValue` to a duplicate-detection key fragment.
///
/// Unlike [`any_to_string`], null is distinguishable from an empty string:
/// a null cell maps to a sentinel that cannot appear in string data.
pub fn any_to_key(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => "\u{0}".to_string(),
        value => any_to_string(value),
    }
}

/// Converts an `AnyValue` to `i64`, returning `None` for null, non-integral,
/// or unparsable values.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(value) => Some(i64::from(value)),
        AnyValue::Int16(value) => Some(i64::from(value)),
        AnyValue::Int32(value) => Some(i64::from(value)),
        AnyValue::Int64(value) => Some(value),
        AnyValue::UInt8(value) => Some(i64::from(value)),
        AnyValue::UInt16(value) => Some(i64::from(value)),
        AnyValue::UInt32(value) => Some(i64::from(value)),
        AnyValue::UInt64(value) => i64::try_from(value).ok(),
        AnyValue::Float32(value) => float_to_i64(f64::from(value)),
        AnyValue::Float64(value) => float_to_i64(value),
        AnyValue::String(value) => parse_i64(value),
        AnyValue::StringOwned(value) => parse_i64(&value),
        _ => None,
    }
}

/// Converts an `AnyValue` to a calendar date.
///
/// `Date` cells convert directly; `Datetime` cells truncate to their date.
/// Everything else is `None`.
pub fn any_to_date(value: AnyValue<'_>) -> Option<NaiveDate> {
    match value {
        AnyValue::Date(days) => date_from_days(days),
        AnyValue::Datetime(timestamp, unit, _) => date_from_timestamp(timestamp, unit),
        AnyValue::DatetimeOwned(timestamp, unit, _) => date_from_timestamp(timestamp, unit),
        _ => None,
    }
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Extract a column's cells through their string form, preserving nulls.
pub fn column_string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| NormalizeError::ColumnNotFound {
            column: name.to_string(),
        })?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        match value {
            AnyValue::Null => values.push(None),
            value => values.push(Some(any_to_string(value))),
        }
    }
    Ok(values)
}

/// Physical `Date` cells count days from the Unix epoch.
fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(TimeDelta::days(i64::from(days)))
}

/// Physical `Datetime` cells count epoch ticks in the column's time unit.
fn date_from_timestamp(timestamp: i64, unit: TimeUnit) -> Option<NaiveDate> {
    let seconds = match unit {
        TimeUnit::Nanoseconds => timestamp.div_euclid(1_000_000_000),
        TimeUnit::Microseconds => timestamp.div_euclid(1_000_000),
        TimeUnit::Milliseconds => timestamp.div_euclid(1_000),
    };
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}

fn float_to_i64(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
