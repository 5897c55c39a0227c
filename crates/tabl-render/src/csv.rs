//! CSV export through the standard encoder.

use tabl_model::Table;

use crate::error::{RenderError, Result};

/// Render the table as CSV bytes: active columns as the header record,
/// then one record per row using each cell's resolved display value.
pub fn to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in table.rows() {
        let mut record = Vec::with_capacity(table.columns().len());
        for (_, datum) in row.items().map_err(RenderError::Table)? {
            record.push(datum.display_value().map_err(RenderError::Table)?);
        }
        writer.write_record(&record)?;
    }
    writer
        .into_inner()
        .map_err(|e| RenderError::Csv(e.into_error().into()))
}

/// Render the table as a CSV string.
pub fn to_csv_string(table: &Table) -> Result<String> {
    let bytes = to_csv(table)?;
    // The writer only ever receives UTF-8 strings.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
