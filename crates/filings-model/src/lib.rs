//! Data model for filing-table normalization.
//!
//! This crate defines the vocabulary shared by the normalization utilities:
//!
//! - **types**: semantic type tags for columns and the date-error policy
//! - **quarter**: the [`FiscalQuarter`] value type and its calendar rules
//! - **mapping**: the [`SchemaMapping`] configuration applied by the caster

pub mod mapping;
pub mod quarter;
pub mod types;

pub use mapping::SchemaMapping;
pub use quarter::FiscalQuarter;
pub use types::{ColumnKind, DateErrorPolicy, DateKind, ScalarType};
