//! Per-column scalar type coercion.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use filings_model::ScalarType;

use crate::data_utils::{any_to_i64, any_to_string};
use crate::error::{NormalizeError, Result};

/// Convert every value in `column` to the requested scalar type.
///
/// - [`ScalarType::Text`]: every non-null value becomes its string form;
///   nulls stay null.
/// - [`ScalarType::NullableInteger`]: nulls are preserved; any non-null
///   value that does not parse as an integer fails the whole operation.
/// - [`ScalarType::Integer`]: every value must parse; a null cell or an
///   unparsable value fails the whole operation. No partial success.
///
/// Returns the converted column; the caller decides whether to assign it
/// back into the table. The source table is never mutated here.
pub fn coerce_column(df: &DataFrame, column: &str, target: ScalarType) -> Result<Series> {
    let source = df
        .column(column)
        .map_err(|_| NormalizeError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let conversion_error = || NormalizeError::TypeConversion {
        column: column.to_string(),
        target: target.to_string(),
    };

    match target {
        ScalarType::Text => {
            let mut values: Vec<Option<String>> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                match source.get(idx).unwrap_or(AnyValue::Null) {
                    AnyValue::Null => values.push(None),
                    value => values.push(Some(any_to_string(value))),
                }
            }
            Ok(Series::new(column.into(), values))
        }
        ScalarType::NullableInteger => {
            let mut values: Vec<Option<i64>> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                match source.get(idx).unwrap_or(AnyValue::Null) {
                    AnyValue::Null => values.push(None),
                    value => match any_to_i64(value) {
                        Some(parsed) => values.push(Some(parsed)),
                        None => return Err(conversion_error()),
                    },
                }
            }
            Ok(Series::new(column.into(), values))
        }
        ScalarType::Integer => {
            let mut values: Vec<i64> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let value = source.get(idx).unwrap_or(AnyValue::Null);
                match any_to_i64(value) {
                    Some(parsed) => values.push(parsed),
                    None => return Err(conversion_error()),
                }
            }
            Ok(Series::new(column.into(), values))
        }
    }
}
