//! Date-like column normalization.
//!
//! - **datetime**: calendar-date parsing and column normalization
//! - **quarter**: fiscal-quarter bucketing of date or raw columns
//!
//! Both normalizers are idempotent: a column already in the requested
//! representation is returned unchanged, and the no-op branch is reported
//! through [`DateOutcome::AlreadyNormalized`].

pub mod datetime;
pub mod quarter;

pub use datetime::{DateOutcome, normalize_date, parse_date};
pub use quarter::normalize_quarter;
