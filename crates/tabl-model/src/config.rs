//! Table configuration: column overrides, formatting rules, styles, sort state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-column display formatting rule.
///
/// `filter` names a filter understood by the injected
/// [`Formatter`](crate::Formatter). `args` are column names resolved against
/// the current row at render time, so a formatted cell can depend on its
/// sibling cells. `options` are passed through to the filter unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    pub filter: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl FormatRule {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The last applied sort, recorded for introspection and parameterless re-sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    #[serde(default)]
    pub reverse: bool,
}

impl SortState {
    pub fn new(column: impl Into<String>, reverse: bool) -> Self {
        Self {
            column: column.into(),
            reverse,
        }
    }
}

/// Caller-supplied configuration for a [`Table`](crate::Table).
///
/// Serializable, so a selection of columns set through
/// [`Table::set_columns`](crate::Table::set_columns) round-trips through any
/// mechanism that re-serializes the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Restrict/reorder the *displayed* columns. Name-based cell access
    /// always goes through the table's default columns, never this list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,

    /// Formatting rules keyed by column name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub formatting: BTreeMap<String, FormatRule>,

    /// Inline HTML style strings keyed by column name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,

    /// Sort applied at construction and re-recorded by every sort() call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted_by: Option<SortState>,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_formatting(mut self, column: impl Into<String>, rule: FormatRule) -> Self {
        self.formatting.insert(column.into(), rule);
        self
    }

    #[must_use]
    pub fn with_style(mut self, column: impl Into<String>, style: impl Into<String>) -> Self {
        self.style.insert(column.into(), style.into());
        self
    }

    #[must_use]
    pub fn with_sorted_by(mut self, column: impl Into<String>, reverse: bool) -> Self {
        self.sorted_by = Some(SortState::new(column, reverse));
        self
    }
}
