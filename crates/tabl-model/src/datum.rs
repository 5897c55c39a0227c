//! A single cell value bound to its row/column/table context.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, TableError};
use crate::table::Table;

/// The smallest addressable unit: one cell's raw value plus the context
/// needed to resolve its display formatting lazily.
///
/// The table back-reference is read-only and used only to look up the
/// column's formatting rule, style, and sibling cells at render time.
/// Equality and ordering compare the raw value.
#[derive(Debug, Clone)]
pub struct Datum<'t> {
    table: &'t Table,
    value: String,
    row_num: usize,
    column_name: String,
}

impl<'t> Datum<'t> {
    pub(crate) fn new(table: &'t Table, value: String, row_num: usize, column_name: String) -> Self {
        Self {
            table,
            value,
            row_num,
            column_name,
        }
    }

    /// The raw cell value, exactly as stored.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn row_num(&self) -> usize {
        self.row_num
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// The inline style configured for this datum's column, if any.
    pub fn style(&self) -> Option<&'t str> {
        self.table.style_for(&self.column_name)
    }

    /// Resolve the display text for this datum.
    ///
    /// Without a formatting rule for the column, this is the raw value
    /// verbatim. With one, each rule argument is read as a column name from
    /// the *current* row and the injected formatter is invoked, so a cell's
    /// display can depend on sibling columns, resolved at render time.
    ///
    /// # Errors
    ///
    /// [`TableError::FormatterUnavailable`] when a rule exists but no
    /// formatter was injected, [`TableError::Format`] when the formatting
    /// collaborator fails (unknown filter name etc.), and
    /// [`TableError::UnknownColumn`] when a rule argument names a column
    /// that doesn't exist.
    pub fn display_value(&self) -> Result<String> {
        let Some(rule) = self.table.format_rule(&self.column_name) else {
            return Ok(self.value.clone());
        };
        let formatter =
            self.table
                .formatter()
                .ok_or_else(|| TableError::FormatterUnavailable {
                    column: self.column_name.clone(),
                })?;
        let row = self
            .table
            .row(self.row_num)
            .ok_or(TableError::RowOutOfBounds {
                row: self.row_num,
                len: self.table.len(),
            })?;
        let mut args = Vec::with_capacity(rule.args.len());
        for arg in &rule.args {
            args.push(row.value(arg)?.to_string());
        }
        Ok(formatter.format(&self.value, &rule.filter, &args, &rule.options)?)
    }
}

/// Falls back to the raw value when resolution fails; exporters use the
/// fallible [`Datum::display_value`] instead.
impl fmt::Display for Datum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_value() {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str(&self.value),
        }
    }
}

impl PartialEq for Datum<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<str> for Datum<'_> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Datum<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialOrd for Datum<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.value.cmp(&other.value))
    }
}

impl PartialOrd<str> for Datum<'_> {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.value.as_str().cmp(other))
    }
}
