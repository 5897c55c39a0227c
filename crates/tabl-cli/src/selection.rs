//! Shared row/column selection applied before every command.

use anyhow::{Context, bail};
use tracing::info;

use tabl_ingest::{from_path, from_url};
use tabl_model::{Table, TableConfig};

use crate::cli::SelectArgs;

/// One `--where` clause, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub column: String,
    pub value: String,
}

/// Parse a `COLUMN=VALUE` filter specification.
pub fn parse_where(spec: &str) -> anyhow::Result<WhereClause> {
    let Some((column, value)) = spec.split_once('=') else {
        bail!("invalid --where clause {spec:?}: expected COLUMN=VALUE");
    };
    if column.is_empty() {
        bail!("invalid --where clause {spec:?}: empty column name");
    }
    Ok(WhereClause {
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Load the source table: an http(s) URL is fetched, anything else is a
/// file path.
pub fn load_table(source: &str) -> anyhow::Result<Table> {
    let table = if source.starts_with("http://") || source.starts_with("https://") {
        from_url(source, TableConfig::new())
            .with_context(|| format!("failed to load table from {source}"))?
    } else {
        from_path(source, TableConfig::new())
            .with_context(|| format!("failed to load table from {source}"))?
    };
    info!(
        source,
        rows = table.len(),
        columns = table.columns().len(),
        "loaded table"
    );
    Ok(table)
}

/// Load the source and apply the shared selection flags: `--where` filters
/// first, then `--sort-by`, then the `--columns` display override.
pub fn select_table(args: &SelectArgs) -> anyhow::Result<Table> {
    let mut table = load_table(&args.source)?;
    if !args.filters.is_empty() {
        let clauses: Vec<WhereClause> = args
            .filters
            .iter()
            .map(|spec| parse_where(spec))
            .collect::<anyhow::Result<_>>()?;
        let query: Vec<(&str, &str)> = clauses
            .iter()
            .map(|clause| (clause.column.as_str(), clause.value.as_str()))
            .collect();
        table = table.filter_eq(&query)?;
    }
    if let Some(column) = &args.sort_by {
        table.sort(Some(column), args.reverse)?;
    }
    if let Some(columns) = &args.columns {
        table.set_columns(columns.iter().cloned());
    }
    Ok(table)
}
