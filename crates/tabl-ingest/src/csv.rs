//! CSV decoding into the raw 2D grid that seeds a table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use tabl_model::{Table, TableConfig};

use crate::error::{IngestError, Result};

/// Strip a BOM and surrounding whitespace from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Decode CSV records from a reader into a 2D grid of strings.
///
/// The first record is the header; it is BOM-stripped and trimmed. Body
/// cells are kept verbatim. All-empty records are skipped, and body records
/// are padded or truncated to the header's width so the resulting grid is
/// rectangular.
pub fn read_grid<R: Read>(reader: R, source_name: &str) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut grid: Vec<Vec<String>> = Vec::new();
    let mut width = 0usize;
    for record in csv_reader.records() {
        let record = record.map_err(|e| IngestError::csv(source_name, e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if grid.is_empty() {
            let header: Vec<String> = record.iter().map(normalize_header).collect();
            width = header.len();
            grid.push(header);
        } else {
            let mut row = Vec::with_capacity(width);
            for idx in 0..width {
                row.push(record.get(idx).unwrap_or("").to_string());
            }
            grid.push(row);
        }
    }
    debug!(
        source = source_name,
        rows = grid.len().saturating_sub(1),
        columns = width,
        "decoded csv grid"
    );
    Ok(grid)
}

/// Load a table from any CSV character stream.
pub fn from_reader<R: Read>(reader: R, config: TableConfig) -> Result<Table> {
    let grid = read_grid(reader, "<reader>")?;
    Ok(Table::new(grid, config)?)
}

/// Load a table from a CSV file on disk.
pub fn from_path(path: impl AsRef<Path>, config: TableConfig) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = read_grid(file, &path.display().to_string())?;
    Ok(Table::new(grid, config)?)
}
