//! The injected formatting capability.
//!
//! The table layer never formats values itself. When a column carries a
//! [`FormatRule`](crate::config::FormatRule), the rule names a filter that
//! some caller-supplied [`Formatter`] knows how to apply. Unknown filter
//! names are the collaborator's failure, reported through [`FormatError`].

use std::collections::BTreeMap;

/// A display-formatting capability supplied by the caller.
///
/// Implementations receive the raw cell value, the filter name from the
/// column's formatting rule, the rule's positional arguments already
/// resolved against the current row, and the rule's named options.
pub trait Formatter: Send + Sync {
    fn format(
        &self,
        value: &str,
        filter: &str,
        args: &[String],
        options: &BTreeMap<String, String>,
    ) -> std::result::Result<String, FormatError>;
}

/// Failure reported by the formatting collaborator.
#[derive(Debug, Clone, thiserror::Error)]
#[error("filter {filter:?} failed: {message}")]
pub struct FormatError {
    pub filter: String,
    pub message: String,
}

impl FormatError {
    pub fn new(filter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            message: message.into(),
        }
    }

    /// The standard failure for a filter name the collaborator doesn't know.
    pub fn unknown_filter(filter: impl Into<String>) -> Self {
        let filter = filter.into();
        let message = format!("no such filter: {filter}");
        Self { filter, message }
    }
}
