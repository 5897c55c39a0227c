//! A column label bound to table-wide style info.

use std::fmt;

use crate::table::Table;

/// A header on a column, with its position among the active columns and a
/// read-only back-reference for style lookup.
#[derive(Debug, Clone)]
pub struct Header<'t> {
    table: &'t Table,
    name: String,
    col_num: usize,
}

impl<'t> Header<'t> {
    pub(crate) fn new(table: &'t Table, name: String, col_num: usize) -> Self {
        Self {
            table,
            name,
            col_num,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn col_num(&self) -> usize {
        self.col_num
    }

    /// The inline style configured for this column, if any.
    pub fn style(&self) -> Option<&'t str> {
        self.table.style_for(&self.name)
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Header<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq<str> for Header<'_> {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}
