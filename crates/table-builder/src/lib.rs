//! # Table Builder
//!
//! Builds the JSON description of a report table: columns with their filter
//! widgets, positional rows, ordering, toolbar toggles and an optional total row.
//!
//! ## Architectural Principles
//!
//! - **Sequential configuration:** a `TableBuilder` is mutated step by step by
//!   one caller and read out with `build_table_properties`, which is pure.
//! - **No validation on the output path:** inconsistent input still yields a
//!   well-formed document. `TableBuilder::inconsistencies` reports problems
//!   without changing output.
//! - **Closed token sets:** filter kinds and search operators map to fixed
//!   renderer tokens.
//!
//! ## Public API
//!
//! - `TableBuilder`, `ColumnMode`: the builder and its duplicate-key policy.
//! - `TableColumn`: a column declaration.
//! - `FilterConfig`, `FilterKind`, `SearchOperator`, `ValueDomain`, `FilterOption`.
//! - `TableIssue`, `TokenError`.

pub mod builder;
pub mod column;
pub mod error;
pub mod filter;

pub use builder::{ColumnMode, TableBuilder};
pub use column::TableColumn;
pub use error::{TableIssue, TokenError};
pub use filter::{FilterConfig, FilterKind, FilterOption, SearchOperator, ValueDomain};
