//! Positional snapshot view over one record's cells.

use crate::datum::Datum;
use crate::error::{Result, TableError};
use crate::table::Table;

/// A row in a table.
///
/// A `Row` is a snapshot, not an alias: its cells are copied at creation
/// and its position is the row's position at that moment. Holding a `Row`
/// across a table mutation (sort, transform, delete) is unsupported; the
/// position may then reference a different record. Rows are immutable;
/// mutation goes through [`Table::set_cell`] and [`Table::update_row`].
#[derive(Debug, Clone)]
pub struct Row<'t> {
    table: &'t Table,
    row_num: usize,
    cells: Vec<String>,
}

impl<'t> Row<'t> {
    pub(crate) fn new(table: &'t Table, row_num: usize, cells: Vec<String>) -> Self {
        Self {
            table,
            row_num,
            cells,
        }
    }

    /// This row's position in the table body at snapshot time.
    pub fn row_num(&self) -> usize {
        self.row_num
    }

    /// The raw cell values, in default-column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The active column names, shared with the owning table.
    pub fn keys(&self) -> &'t [String] {
        self.table.columns()
    }

    /// The cell for a column as a [`Datum`].
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownColumn`] when the name is not one of the
    /// table's default columns.
    pub fn datum(&self, column: &str) -> Result<Datum<'t>> {
        let index = self.table.column_index(column)?;
        self.cells
            .get(index)
            .map(|value| Datum::new(self.table, value.clone(), self.row_num, column.to_string()))
            .ok_or_else(|| TableError::unknown_column(column))
    }

    /// The cell for a column, or `None` when the column doesn't exist.
    /// The non-raising counterpart of [`Row::datum`].
    pub fn get(&self, column: &str) -> Option<Datum<'t>> {
        self.datum(column).ok()
    }

    /// The raw string value for a column.
    pub fn value(&self, column: &str) -> Result<&str> {
        let index = self.table.column_index(column)?;
        self.cells
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| TableError::unknown_column(column))
    }

    /// One datum per *active* column, in display order.
    pub fn data(&self) -> Result<Vec<Datum<'t>>> {
        self.keys().iter().map(|column| self.datum(column)).collect()
    }

    /// The raw values of the active columns, in display order.
    pub fn values(&self) -> Result<Vec<String>> {
        Ok(self
            .data()?
            .into_iter()
            .map(|datum| datum.value().to_string())
            .collect())
    }

    /// Ordered `(active column name, resolved datum)` pairs.
    pub fn items(&self) -> Result<Vec<(String, Datum<'t>)>> {
        self.keys()
            .iter()
            .map(|column| Ok((column.clone(), self.datum(column)?)))
            .collect()
    }
}

impl PartialEq for Row<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}
