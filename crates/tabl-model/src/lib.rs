//! In-memory tabular data model for publishing workflows.
//!
//! Loads row/column data (typically CSV, via `tabl-ingest`), supports
//! spreadsheet-like operations (sort, filter, facet, transpose, transform,
//! aggregate), and hands row/datum/header views to the exporters in
//! `tabl-render`.

pub mod config;
pub mod datum;
pub mod error;
pub mod format;
pub mod header;
pub mod row;
pub mod table;

pub use config::{FormatRule, SortState, TableConfig};
pub use datum::Datum;
pub use error::{Result, TableError};
pub use format::{FormatError, Formatter};
pub use header::Header;
pub use row::Row;
pub use table::Table;
