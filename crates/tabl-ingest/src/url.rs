//! One-shot blocking fetch of remote CSV sources.

use std::io::Cursor;

use tracing::debug;

use tabl_model::{Table, TableConfig};

use crate::csv::read_grid;
use crate::error::{IngestError, Result};

/// Download a CSV document and load it as a table.
///
/// A single blocking GET performed once at construction; HTTP failures and
/// non-success statuses propagate unmodified, with no retry.
pub fn from_url(url: &str, config: TableConfig) -> Result<Table> {
    let body = fetch(url)?;
    debug!(url, bytes = body.len(), "fetched remote csv");
    let grid = read_grid(Cursor::new(body), url)?;
    Ok(Table::new(grid, config)?)
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    let http_error = |source| IngestError::Http {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(http_error)?;
    let bytes = response.bytes().map_err(http_error)?;
    Ok(bytes.to_vec())
}
