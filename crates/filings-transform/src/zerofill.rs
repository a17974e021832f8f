//! Zero-padded numeric string decoding.

use polars::prelude::{NamedFrom, Series};

use filings_model::ColumnKind;

use crate::data_utils::column_string_values;
use crate::error::{NormalizeError, Result};
use crate::frame::FilingFrame;

/// Which integer representation a decoded column ended up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerRepr {
    /// The column had missing values; empty cells decoded to null.
    Nullable,
    /// No missing values; the result carries no nulls and empty cells
    /// decoded to zero.
    Plain,
}

/// Decode a zero-padded numeric string column (e.g. `"0000320193"` filer
/// numbers) into integers in place.
///
/// Leading zeros are stripped and the remainder parsed. A value that is
/// all zeros decodes to 0 in both representations. If the column has any
/// missing values the result is [`IntegerRepr::Nullable`] and empty cells
/// become null; otherwise it is [`IntegerRepr::Plain`] and an empty cell
/// decodes to 0 rather than null. Callers relying on that asymmetry
/// should take note; it mirrors the long-standing behavior of the
/// pipeline this replaces. A non-empty remainder that is not numeric
/// fails with [`NormalizeError::TypeConversion`].
pub fn decode_zero_padded(frame: &mut FilingFrame, column: &str) -> Result<IntegerRepr> {
    let values = column_string_values(&frame.data, column)?;
    let has_missing = values.iter().any(|value| value.is_none());
    let repr = if has_missing {
        IntegerRepr::Nullable
    } else {
        IntegerRepr::Plain
    };

    let conversion_error = || NormalizeError::TypeConversion {
        column: column.to_string(),
        target: match repr {
            IntegerRepr::Nullable => "nullable-integer".to_string(),
            IntegerRepr::Plain => "integer".to_string(),
        },
    };

    let mut decoded: Vec<Option<i64>> = Vec::with_capacity(values.len());
    for value in &values {
        match value {
            None => decoded.push(None),
            Some(text) => {
                let stripped = text.trim_start_matches('0');
                if stripped.is_empty() {
                    // All zeros decodes to 0; a genuinely empty cell is
                    // null only when the column has missing values.
                    if text.is_empty() && has_missing {
                        decoded.push(None);
                    } else {
                        decoded.push(Some(0));
                    }
                } else {
                    match stripped.parse::<i64>() {
                        Ok(parsed) => decoded.push(Some(parsed)),
                        Err(_) => return Err(conversion_error()),
                    }
                }
            }
        }
    }

    let series = match repr {
        IntegerRepr::Nullable => Series::new(column.into(), decoded),
        // No nulls by construction; build the plain representation.
        IntegerRepr::Plain => Series::new(
            column.into(),
            decoded.into_iter().flatten().collect::<Vec<i64>>(),
        ),
    };
    frame.data.with_column(series)?;
    frame.set_kind(column, ColumnKind::Raw);
    Ok(repr)
}
