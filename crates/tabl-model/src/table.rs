//! The owned tabular dataset and its derived-view operations.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::{SortState, TableConfig};
use crate::error::{Result, TableError};
use crate::format::Formatter;
use crate::header::Header;
use crate::row::Row;

/// An in-memory table, to be manipulated like a spreadsheet.
///
/// A `Table` owns a rectangular grid of string cells (the body), the header
/// that was split off the first input row, and the caller's configuration.
/// Row/header/datum views are built fresh on every access; derived tables
/// (filter, facet, transpose) are new, independent instances that never
/// alias this table's row storage.
#[derive(Clone)]
pub struct Table {
    rows: Vec<Vec<String>>,
    default_columns: Vec<String>,
    config: TableConfig,
    faceted_on: Option<String>,
    deleted_rows: Vec<Vec<String>>,
    formatter: Option<Arc<dyn Formatter>>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("default_columns", &self.default_columns)
            .field("rows", &self.rows.len())
            .field("config", &self.config)
            .field("faceted_on", &self.faceted_on)
            .field("has_formatter", &self.formatter.is_some())
            .finish()
    }
}

impl Table {
    /// Build a table from a 2D grid whose first row is the header.
    ///
    /// A header-only grid yields a valid zero-row table. If
    /// `config.sorted_by` names a column, the sort is applied immediately.
    ///
    /// # Errors
    ///
    /// [`TableError::EmptyTable`] when the grid has no header row,
    /// [`TableError::ShapeMismatch`] when a body row's width differs from
    /// the header's, and [`TableError::UnknownColumn`] when `sorted_by`
    /// names a column that isn't in the header.
    pub fn new(grid: Vec<Vec<String>>, config: TableConfig) -> Result<Self> {
        Self::build(grid, config, None)
    }

    /// Same as [`Table::new`], with a display-formatting capability injected.
    pub fn with_formatter(
        grid: Vec<Vec<String>>,
        config: TableConfig,
        formatter: Arc<dyn Formatter>,
    ) -> Result<Self> {
        Self::build(grid, config, Some(formatter))
    }

    fn build(
        mut grid: Vec<Vec<String>>,
        config: TableConfig,
        formatter: Option<Arc<dyn Formatter>>,
    ) -> Result<Self> {
        if grid.is_empty() {
            return Err(TableError::EmptyTable);
        }
        let default_columns = grid.remove(0);
        let expected = default_columns.len();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != expected {
                return Err(TableError::ShapeMismatch {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }
        }
        let mut table = Self {
            rows: grid,
            default_columns,
            config,
            faceted_on: None,
            deleted_rows: Vec::new(),
            formatter,
        };
        if let Some(state) = table.config.sorted_by.clone() {
            table.sort(Some(&state.column), state.reverse)?;
        }
        Ok(table)
    }

    /// Internal constructor for derived tables: the body is already
    /// rectangular and ordered, so no validation or re-sort happens.
    fn derived(&self, rows: Vec<Vec<String>>, config: TableConfig) -> Self {
        Self {
            rows,
            default_columns: self.default_columns.clone(),
            config,
            faceted_on: None,
            deleted_rows: Vec::new(),
            formatter: self.formatter.clone(),
        }
    }

    // --- accessors ---

    /// The columns used for display: the active override when set,
    /// otherwise the default columns.
    pub fn columns(&self) -> &[String] {
        self.config
            .columns
            .as_deref()
            .unwrap_or(&self.default_columns)
    }

    /// Override the displayed columns. The list is stored in the
    /// configuration, so it survives config round-trips.
    pub fn set_columns(&mut self, columns: impl IntoIterator<Item = impl Into<String>>) {
        self.config.columns = Some(columns.into_iter().map(Into::into).collect());
    }

    /// The authoritative header, used for all name-based lookups.
    pub fn default_columns(&self) -> &[String] {
        &self.default_columns
    }

    /// Resolve a column name to its index in the default columns.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.default_columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| TableError::unknown_column(column))
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The raw body rows (header excluded).
    pub fn raw_rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The grouping value when this table was produced by
    /// [`facet_by`](Table::facet_by).
    pub fn faceted_on(&self) -> Option<&str> {
        self.faceted_on.as_deref()
    }

    /// Rows removed through [`delete_row`](Table::delete_row), in deletion
    /// order. An audit trail only; nothing else consumes it.
    pub fn deleted_rows(&self) -> &[Vec<String>] {
        &self.deleted_rows
    }

    pub fn formatter(&self) -> Option<&Arc<dyn Formatter>> {
        self.formatter.as_ref()
    }

    pub(crate) fn format_rule(&self, column: &str) -> Option<&crate::config::FormatRule> {
        self.config.formatting.get(column)
    }

    /// The inline style configured for a column, if any.
    pub fn style_for(&self, column: &str) -> Option<&str> {
        self.config.style.get(column).map(String::as_str)
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // --- views ---

    /// Snapshot view of one row, or `None` when out of bounds.
    pub fn row(&self, row_num: usize) -> Option<Row<'_>> {
        self.rows
            .get(row_num)
            .map(|cells| Row::new(self, row_num, cells.clone()))
    }

    /// Fresh snapshot views over every row, in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, cells)| Row::new(self, i, cells.clone()))
    }

    /// Header views over the *active* columns.
    pub fn headers(&self) -> Vec<Header<'_>> {
        self.columns()
            .iter()
            .enumerate()
            .map(|(i, name)| Header::new(self, name.clone(), i))
            .collect()
    }

    /// Per-row ordered mapping from active column name to resolved
    /// [`Datum`](crate::Datum). Consumers needing the raw string read
    /// `value()` off the datum.
    pub fn records(&self) -> Result<Vec<Vec<(String, crate::Datum<'_>)>>> {
        self.rows().map(|row| row.items()).collect()
    }

    // --- mutation ---

    /// Append raw rows to the body.
    ///
    /// # Errors
    ///
    /// [`TableError::ShapeMismatch`] when any row's width differs from the
    /// header's; nothing is appended in that case.
    pub fn push_rows(&mut self, rows: Vec<Vec<String>>) -> Result<()> {
        let expected = self.default_columns.len();
        for (offset, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(TableError::ShapeMismatch {
                    row: self.rows.len() + offset,
                    expected,
                    actual: cells.len(),
                });
            }
        }
        self.rows.extend(rows);
        Ok(())
    }

    /// Remove a row from the body, keeping it in the deleted-rows audit
    /// trail.
    pub fn delete_row(&mut self, row_num: usize) -> Result<()> {
        if row_num >= self.rows.len() {
            return Err(TableError::RowOutOfBounds {
                row: row_num,
                len: self.rows.len(),
            });
        }
        let removed = self.rows.remove(row_num);
        self.deleted_rows.push(removed);
        Ok(())
    }

    /// Set a single cell by row position and column name.
    pub fn set_cell(
        &mut self,
        row_num: usize,
        column: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let index = self.column_index(column)?;
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(row_num)
            .ok_or(TableError::RowOutOfBounds { row: row_num, len })?;
        row[index] = value.into();
        Ok(())
    }

    /// Update several cells of one row. All column names are validated
    /// before any cell changes.
    pub fn update_row(&mut self, row_num: usize, updates: &[(&str, &str)]) -> Result<()> {
        let mut resolved = Vec::with_capacity(updates.len());
        for (column, value) in updates {
            resolved.push((self.column_index(column)?, *value));
        }
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(row_num)
            .ok_or(TableError::RowOutOfBounds { row: row_num, len })?;
        for (index, value) in resolved {
            row[index] = value.to_string();
        }
        Ok(())
    }

    /// Stable sort of the body rows by the raw string value in one column.
    ///
    /// With `column` omitted, the last recorded sort column is reused.
    /// Values compare as strings, never numerically. The applied sort is
    /// recorded in the configuration for introspection and re-sort.
    pub fn sort(&mut self, column: Option<&str>, reverse: bool) -> Result<()> {
        let column = match column {
            Some(name) => name.to_string(),
            None => self
                .config
                .sorted_by
                .as_ref()
                .map(|state| state.column.clone())
                .ok_or(TableError::NoSortColumn)?,
        };
        let index = self.column_index(&column)?;
        if reverse {
            self.rows.sort_by(|a, b| b[index].cmp(&a[index]));
        } else {
            self.rows.sort_by(|a, b| a[index].cmp(&b[index]));
        }
        debug!(column, reverse, rows = self.rows.len(), "sorted table");
        self.config.sorted_by = Some(SortState::new(column, reverse));
        Ok(())
    }

    /// Replace every value in one column with `f(current_value)`, in place.
    pub fn transform<F>(&mut self, column: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&str) -> String,
    {
        let index = self.column_index(column)?;
        for row in &mut self.rows {
            row[index] = f(&row[index]);
        }
        Ok(())
    }

    /// All raw values of one column, in row order.
    pub fn values(&self, column: &str) -> Result<Vec<String>> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    /// The distinct raw values of one column.
    pub fn unique_values(&self, column: &str) -> Result<BTreeSet<String>> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    /// Parse every value of one column as a float and sum them.
    ///
    /// # Errors
    ///
    /// [`TableError::NonNumeric`] on the first unparsable cell, so callers
    /// can tell bad data apart from a bad column name.
    pub fn total(&self, column: &str) -> Result<f64> {
        let index = self.column_index(column)?;
        let mut sum = 0.0;
        for row in &self.rows {
            let value = &row[index];
            let parsed: f64 = value.trim().parse().map_err(|_| TableError::NonNumeric {
                column: column.to_string(),
                value: value.clone(),
            })?;
            sum += parsed;
        }
        Ok(sum)
    }

    // --- derived tables ---

    /// New table holding the rows the predicate keeps, in original order.
    /// The result carries a copy of this table's configuration.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Row<'_>) -> bool,
    {
        let kept: Vec<Vec<String>> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, cells)| predicate(&Row::new(self, *i, (*cells).clone())))
            .map(|(_, cells)| cells.clone())
            .collect();
        debug!(kept = kept.len(), from = self.rows.len(), "filtered table");
        self.derived(kept, self.config.clone())
    }

    /// Conjunction of exact-match equality filters, one per `(column, value)`
    /// pair. Column names are validated before any filtering happens.
    pub fn filter_eq(&self, query: &[(&str, &str)]) -> Result<Self> {
        for (column, _) in query {
            self.column_index(column)?;
        }
        let mut result = self.clone();
        for (column, value) in query {
            let index = result.column_index(column)?;
            result = result.filter(|row| row.cells().get(index).is_some_and(|cell| cell == value));
        }
        Ok(result)
    }

    /// Partition the rows by the exact value of one column.
    ///
    /// Rows with an empty value in that column are excluded from every
    /// facet. Each facet table carries a deep copy of this table's
    /// configuration, records its grouping value, and preserves the
    /// relative order of its rows; the returned collection is ordered by
    /// ascending facet value.
    pub fn facet_by(&self, column: &str) -> Result<Vec<Self>> {
        let index = self.column_index(column)?;
        let mut groups: BTreeMap<String, Vec<Vec<String>>> = BTreeMap::new();
        for row in &self.rows {
            let value = &row[index];
            if value.is_empty() {
                continue;
            }
            groups.entry(value.clone()).or_default().push(row.clone());
        }
        debug!(column, facets = groups.len(), "faceted table");
        Ok(groups
            .into_iter()
            .map(|(value, rows)| {
                let mut table = self.derived(rows, self.config.clone());
                table.faceted_on = Some(value);
                table
            })
            .collect())
    }

    /// Rebuild the table with rows and columns swapped.
    ///
    /// The header participates as the conceptual row 0, so the new header
    /// is the original first column's values and transposing twice restores
    /// the original header+body grid. The explicit column override no
    /// longer applies under the new axes and is dropped, as is the recorded
    /// sort; formatting and style carry over as-is.
    pub fn transpose(&self) -> Result<Self> {
        let width = self.default_columns.len();
        let mut grid: Vec<Vec<String>> = Vec::with_capacity(width);
        for i in 0..width {
            let mut row = Vec::with_capacity(self.rows.len() + 1);
            row.push(self.default_columns[i].clone());
            for cells in &self.rows {
                row.push(cells[i].clone());
            }
            grid.push(row);
        }
        let config = TableConfig {
            columns: None,
            sorted_by: None,
            ..self.config.clone()
        };
        debug!(
            rows = self.rows.len(),
            columns = width,
            "transposed table"
        );
        let mut table = Self::new(grid, config)?;
        table.formatter = self.formatter.clone();
        Ok(table)
    }

    // --- mapping ---

    /// Apply `f` to every row snapshot, producing one result per row.
    pub fn map_rows<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(Row<'_>) -> T,
    {
        self.rows().map(f).collect()
    }

    /// Apply `f` element-wise to one column's values.
    pub fn map_column<T, F>(&self, column: &str, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&str) -> T,
    {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| f(&row[index])).collect())
    }

    /// Apply `f` element-wise to each named column, returning one value
    /// sequence per column, aligned with the given column order.
    pub fn map_columns<T, F>(&self, columns: &[&str], mut f: F) -> Result<Vec<Vec<T>>>
    where
        F: FnMut(&str) -> T,
    {
        let mut indexes = Vec::with_capacity(columns.len());
        for column in columns {
            indexes.push(self.column_index(column)?);
        }
        Ok(indexes
            .into_iter()
            .map(|index| self.rows.iter().map(|row| f(&row[index])).collect())
            .collect())
    }
}
