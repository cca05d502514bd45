//! # Trade Reports
//!
//! Turns trading-server records into report documents for the remote UI
//! renderer, using the `ui-ast` tree and the `table-builder` table description.
//!
//! ## Architectural Principles
//!
//! - **Thin glue:** fetching goes through the `DataSource` trait, formatting
//!   lives in `format`, and all document construction is delegated to the
//!   `ui-ast` and `table-builder` crates.
//! - **Degrade, don't abort:** a failing source call is logged and the report
//!   is produced from partial data. Nothing in the document path returns an
//!   error.
//!
//! ## Public API
//!
//! - `ReportEngine`: builds the pending trades report tree.
//! - `DataSource`, `FixtureSource`, `GroupMask`: the upstream boundary.
//! - `ReportRequest`: group mask and time window of a run.
//! - `wrap_modal`, `about_report`: the envelope and catalogue metadata.
//! - `ReportError`, `SourceError`.

pub mod about;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod format;
pub mod request;
pub mod source;

pub use about::{ReportInfo, ReportKind, about_report};
pub use engine::ReportEngine;
pub use envelope::wrap_modal;
pub use error::{ReportError, SourceError};
pub use request::ReportRequest;
pub use source::{DataSource, FixtureSource, GroupMask, RateRecord};
