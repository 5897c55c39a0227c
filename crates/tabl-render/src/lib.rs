//! Exporters that serialize a table to HTML, CSV, and JSON.
//!
//! Every exporter resolves cell text through the datum's lazy display path,
//! so per-column formatting rules apply uniformly across output formats.

pub mod csv;
pub mod error;
pub mod html;
pub mod json;

pub use crate::csv::{to_csv, to_csv_string};
pub use crate::error::{RenderError, Result};
pub use crate::html::to_html;
pub use crate::json::{to_json, to_json_pretty};
