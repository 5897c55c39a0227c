#![deny(unsafe_code)]

use crate::format::FormatError;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("{column} isn't a column in this table")]
    UnknownColumn { column: String },

    #[error("column {column} contains non-numeric value {value:?}")]
    NonNumeric { column: String, value: String },

    #[error("table input is empty (no header row)")]
    EmptyTable,

    #[error("row {row} has {actual} cells, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} is out of bounds (table has {len} rows)")]
    RowOutOfBounds { row: usize, len: usize },

    #[error("sort called with no column and no prior sort state")]
    NoSortColumn,

    #[error("column {column} has a formatting rule but no formatter was injected")]
    FormatterUnavailable { column: String },

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl TableError {
    pub(crate) fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
