//! Filing-table normalization utilities.
//!
//! This crate prepares heterogeneous filing tables (records keyed by
//! identifiers and reporting periods) for safe joining and persistence:
//!
//! - **coerce**: per-column conversion to canonical scalar types
//! - **normalization**: calendar-date and fiscal-quarter normalization,
//!   idempotent against already-converted columns
//! - **schema**: bulk column casting driven by a [`SchemaMapping`]
//! - **merge**: key-uniqueness checking and duplicate-safe left joins
//! - **axis**: gap-free fiscal-quarter reference axes
//! - **zerofill**: zero-padded numeric string decoding
//!
//! All operations read and return table values; none hold state across
//! calls. Loading tables and persisting results are the caller's concern.

pub mod axis;
pub mod coerce;
pub mod data_utils;
pub mod error;
pub mod frame;
pub mod merge;
pub mod normalization;
pub mod schema;
pub mod zerofill;

pub use filings_model::SchemaMapping;

// Re-export the operation surface for external use
pub use axis::quarter_range;
pub use coerce::coerce_column;
pub use error::{NormalizeError, Result};
pub use frame::FilingFrame;
pub use merge::{has_duplicates, left_merge_safe};
pub use normalization::{DateOutcome, normalize_date, normalize_quarter, parse_date};
pub use schema::apply_schema;
pub use zerofill::{IntegerRepr, decode_zero_padded};
