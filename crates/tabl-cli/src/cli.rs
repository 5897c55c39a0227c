//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabl",
    version,
    about = "Reshape and publish delimited tabular data",
    long_about = "Load CSV data from files or URLs, reshape it (sort, filter,\n\
                  facet, column selection), and render it to the terminal or\n\
                  to HTML, CSV, and JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview a table in the terminal.
    Show(ShowArgs),

    /// Export a table as HTML, CSV, or JSON.
    Export(ExportArgs),

    /// Partition a table by one column's values.
    Facet(FacetArgs),

    /// Sum a numeric column.
    Total(TotalArgs),
}

/// Selection flags shared by every subcommand.
#[derive(Args)]
pub struct SelectArgs {
    /// CSV file path, or an http(s) URL to fetch.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Keep only rows where COLUMN equals VALUE (repeatable, AND semantics).
    #[arg(long = "where", value_name = "COLUMN=VALUE")]
    pub filters: Vec<String>,

    /// Sort rows by this column before output.
    #[arg(long = "sort-by", value_name = "COLUMN")]
    pub sort_by: Option<String>,

    /// Reverse the sort order.
    #[arg(long = "reverse", requires = "sort_by")]
    pub reverse: bool,

    /// Restrict/reorder the displayed columns (comma-separated).
    #[arg(long = "columns", value_name = "COLUMNS", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub select: SelectArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: ExportFormatArg,

    /// Write to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Args)]
pub struct FacetArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Column to partition by.
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: String,
}

#[derive(Args)]
pub struct TotalArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Column to sum.
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Html,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
