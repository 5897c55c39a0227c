//! HTML export.
//!
//! The tag/attribute shape is fixed: one `<thead>` with a `<th>` per active
//! column (names unescaped), then a `<tbody>` with one
//! `<tr id="rowN" class="row odd|even">` per row (`even` at row 0) and a
//! `<td style="..." class="datum">` per active column. The `style`
//! attribute is the column's configured style string, or empty.

use tabl_model::{Row, Table};

use crate::error::Result;

/// Render the table as an HTML `<table>` string.
pub fn to_html(table: &Table) -> Result<String> {
    let mut thead = String::from("<thead>\n<tr>");
    for column in table.columns() {
        thead.push_str("<th>");
        thead.push_str(column);
        thead.push_str("</th>");
    }
    thead.push_str("</tr>\n</thead>");

    let mut body_rows = Vec::with_capacity(table.len());
    for row in table.rows() {
        body_rows.push(row_to_tr(table, &row)?);
    }
    let tbody = format!("<tbody>\n{}\n</tbody>", body_rows.join("\n"));

    Ok(format!("<table>\n{thead}\n{tbody}\n</table>"))
}

fn row_to_tr(table: &Table, row: &Row<'_>) -> Result<String> {
    let row_num = row.row_num();
    let mut tr = format!(
        "<tr id=\"row{row_num}\" class=\"row {}\">",
        odd_even(row_num)
    );
    for datum in row.data()? {
        let style = table.style_for(datum.column_name()).unwrap_or("");
        let display = datum.display_value()?;
        tr.push_str(&format!(
            "<td style=\"{style}\" class=\"datum\">{display}</td>"
        ));
    }
    tr.push_str("</tr>");
    Ok(tr)
}

fn odd_even(row_num: usize) -> &'static str {
    if row_num % 2 == 0 { "even" } else { "odd" }
}
