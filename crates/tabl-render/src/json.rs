//! JSON export.

use serde_json::{Map, Value};
use tabl_model::Table;

use crate::error::{RenderError, Result};

/// Render the table as a JSON array of objects, one per row, keyed by the
/// active column names in display order.
pub fn to_json(table: &Table) -> Result<String> {
    Ok(serde_json::to_string(&to_value(table)?)?)
}

/// Same as [`to_json`], pretty-printed.
pub fn to_json_pretty(table: &Table) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(table)?)?)
}

fn to_value(table: &Table) -> Result<Value> {
    let mut rows = Vec::with_capacity(table.len());
    for record in table.records().map_err(RenderError::Table)? {
        let mut object = Map::with_capacity(record.len());
        for (column, datum) in record {
            let display = datum.display_value().map_err(RenderError::Table)?;
            object.insert(column, Value::String(display));
        }
        rows.push(Value::Object(object));
    }
    Ok(Value::Array(rows))
}
