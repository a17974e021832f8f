//! Fiscal-quarter value type.
//!
//! A fiscal quarter is a three-calendar-month span beginning at the first
//! day of January, April, July, or October, identified by (year, quarter).
//! The textual designator is `YYYYQn`, e.g. `2000Q1`.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A fiscal-quarter bucket: (year, quarter number 1-4).
///
/// Ordering is chronological. The `YYYYQn` designator sorts the same way
/// lexicographically for four-digit years, which is what lets quarter
/// columns be stored and joined as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FiscalQuarter {
    pub year: i32,
    /// Quarter number, always 1-4.
    pub quarter: u8,
}

impl FiscalQuarter {
    /// Create a quarter, returning `None` if the quarter number is not 1-4
    /// or the year is outside the representable calendar range.
    pub fn new(year: i32, quarter: u8) -> Option<Self> {
        if !(1..=4).contains(&quarter) {
            return None;
        }
        // chrono cannot represent years beyond roughly +/-262000; a quarter
        // whose start date is not constructible is rejected up front.
        NaiveDate::from_ymd_opt(year, 1, 1)?;
        Some(Self { year, quarter })
    }

    /// Parse a `YYYYQn` designator, e.g. `2000Q1`. Case-insensitive on the
    /// separator; leading/trailing whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let (year_part, quarter_part) = trimmed
            .split_once('Q')
            .or_else(|| trimmed.split_once('q'))?;
        let year: i32 = year_part.parse().ok()?;
        let quarter: u8 = quarter_part.parse().ok()?;
        Self::new(year, quarter)
    }

    /// Bucket a calendar date into its containing quarter.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: ((date.month0() / 3) + 1) as u8,
        }
    }

    /// First day of the quarter (Jan/Apr/Jul/Oct 1).
    ///
    /// `None` only for hand-built values [`new`](Self::new) would reject.
    pub fn first_day(&self) -> Option<NaiveDate> {
        let month = u32::from(self.quarter).saturating_sub(1) * 3 + 1;
        NaiveDate::from_ymd_opt(self.year, month, 1)
    }

    /// The immediately following quarter.
    pub fn succ(&self) -> Self {
        if self.quarter == 4 {
            Self {
                year: self.year + 1,
                quarter: 1,
            }
        } else {
            Self {
                year: self.year,
                quarter: self.quarter + 1,
            }
        }
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}Q{}", self.year, self.quarter)
    }
}
