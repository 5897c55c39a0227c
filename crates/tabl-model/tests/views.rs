//! Row/Datum/Header views and lazy formatting resolution.

use std::collections::BTreeMap;
use std::sync::Arc;

use tabl_model::{
    FormatError, FormatRule, Formatter, Table, TableConfig, TableError,
};

/// Minimal formatting capability for tests: a `link` filter that reads its
/// href from another column, and a `suffix` filter driven by options.
struct TestFormatter;

impl Formatter for TestFormatter {
    fn format(
        &self,
        value: &str,
        filter: &str,
        args: &[String],
        options: &BTreeMap<String, String>,
    ) -> Result<String, FormatError> {
        match filter {
            "link" => {
                let href = args.first().map(String::as_str).unwrap_or("");
                Ok(format!("<a href=\"{href}\">{value}</a>"))
            }
            "suffix" => {
                let suffix = options.get("text").map(String::as_str).unwrap_or("");
                Ok(format!("{value}{suffix}"))
            }
            other => Err(FormatError::unknown_filter(other)),
        }
    }
}

fn grid() -> Vec<Vec<String>> {
    let raw = [
        ["Title", "Url", "Pages"],
        ["Ulysses", "https://example.com/ulysses", "644"],
        ["The Queue", "https://example.com/queue", "263"],
    ];
    raw.iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

#[test]
fn row_lookup_by_name() {
    let table = Table::new(grid(), TableConfig::new()).expect("table");
    let row = table.row(0).expect("row 0");
    assert_eq!(row.row_num(), 0);
    assert_eq!(row.value("Title").expect("title"), "Ulysses");
    let datum = row.datum("Pages").expect("pages datum");
    assert_eq!(datum.value(), "644");
    assert_eq!(datum.column_name(), "Pages");
    assert_eq!(datum.row_num(), 0);
}

#[test]
fn row_get_returns_none_instead_of_raising() {
    let table = Table::new(grid(), TableConfig::new()).expect("table");
    let row = table.row(0).expect("row 0");
    assert!(row.get("Nope").is_none());
    assert_eq!(
        row.get("Nope").map(|d| d.value().to_string()),
        None
    );
    let err = row.datum("Nope").unwrap_err();
    assert!(matches!(err, TableError::UnknownColumn { column } if column == "Nope"));
}

#[test]
fn row_items_follow_active_columns() {
    let mut table = Table::new(grid(), TableConfig::new()).expect("table");
    table.set_columns(["Pages", "Title"]);
    let row = table.row(1).expect("row 1");
    assert_eq!(row.keys(), ["Pages", "Title"]);
    let items = row.items().expect("items");
    let keys: Vec<&str> = items.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["Pages", "Title"]);
    assert_eq!(items[0].1.value(), "263");
    assert_eq!(items[1].1.value(), "The Queue");
    assert_eq!(
        row.values().expect("values"),
        ["263", "The Queue"]
    );
}

#[test]
fn rows_are_snapshots() {
    let mut table = Table::new(grid(), TableConfig::new()).expect("table");
    let snapshot: Vec<String> = table.row(0).expect("row 0").cells().to_vec();
    table.sort(Some("Title"), false).expect("sort");
    // The old snapshot keeps its cells even though row 0 now differs.
    assert_eq!(snapshot[0], "Ulysses");
    assert_eq!(table.row(0).expect("row 0").value("Title").expect("title"), "The Queue");
}

#[test]
fn datum_compares_by_value() {
    let table = Table::new(grid(), TableConfig::new()).expect("table");
    let row0 = table.row(0).expect("row 0");
    let row1 = table.row(1).expect("row 1");
    let a = row0.datum("Pages").expect("pages");
    let b = row1.datum("Pages").expect("pages");
    assert_eq!(a, "644");
    assert_ne!(a, b);
    assert!(a > b); // "644" > "263" as strings
}

#[test]
fn formatting_resolves_lazily_with_row_context() {
    let config = TableConfig::new()
        .with_formatting("Title", FormatRule::new("link").with_args(["Url"]));
    let table =
        Table::with_formatter(grid(), config, Arc::new(TestFormatter)).expect("table");
    let datum = table.row(0).expect("row 0").datum("Title").expect("title");
    assert_eq!(
        datum.display_value().expect("display"),
        "<a href=\"https://example.com/ulysses\">Ulysses</a>"
    );
    // Raw value is untouched.
    assert_eq!(datum.value(), "Ulysses");
    // Columns without a rule display verbatim.
    let pages = table.row(0).expect("row 0").datum("Pages").expect("pages");
    assert_eq!(pages.display_value().expect("display"), "644");
}

#[test]
fn formatting_sees_current_row_after_transform() {
    let config = TableConfig::new()
        .with_formatting("Title", FormatRule::new("link").with_args(["Url"]));
    let mut table =
        Table::with_formatter(grid(), config, Arc::new(TestFormatter)).expect("table");
    table
        .transform("Url", |_| "https://mirror.test/".to_string())
        .expect("transform");
    let datum = table.row(0).expect("row 0").datum("Title").expect("title");
    assert_eq!(
        datum.display_value().expect("display"),
        "<a href=\"https://mirror.test/\">Ulysses</a>"
    );
}

#[test]
fn formatting_options_pass_through() {
    let config = TableConfig::new().with_formatting(
        "Pages",
        FormatRule::new("suffix").with_option("text", " pp."),
    );
    let table =
        Table::with_formatter(grid(), config, Arc::new(TestFormatter)).expect("table");
    let datum = table.row(1).expect("row 1").datum("Pages").expect("pages");
    assert_eq!(datum.display_value().expect("display"), "263 pp.");
}

#[test]
fn unknown_filter_is_the_collaborators_failure() {
    let config =
        TableConfig::new().with_formatting("Pages", FormatRule::new("sparkline"));
    let table =
        Table::with_formatter(grid(), config, Arc::new(TestFormatter)).expect("table");
    let datum = table.row(0).expect("row 0").datum("Pages").expect("pages");
    let err = datum.display_value().unwrap_err();
    assert!(matches!(err, TableError::Format(_)));
    // Display falls back to the raw value.
    assert_eq!(datum.to_string(), "644");
}

#[test]
fn rule_without_formatter_is_reported() {
    let config = TableConfig::new().with_formatting("Pages", FormatRule::new("suffix"));
    let table = Table::new(grid(), config).expect("table");
    let datum = table.row(0).expect("row 0").datum("Pages").expect("pages");
    let err = datum.display_value().unwrap_err();
    assert!(matches!(
        err,
        TableError::FormatterUnavailable { column } if column == "Pages"
    ));
}

#[test]
fn facet_tables_share_the_formatter() {
    let config = TableConfig::new().with_formatting(
        "Pages",
        FormatRule::new("suffix").with_option("text", " pp."),
    );
    let table =
        Table::with_formatter(grid(), config, Arc::new(TestFormatter)).expect("table");
    let facets = table.facet_by("Title").expect("facets");
    let facet = &facets[0];
    let datum = facet.row(0).expect("row 0").datum("Pages").expect("pages");
    assert!(datum.display_value().expect("display").ends_with(" pp."));
}

#[test]
fn header_carries_style() {
    let config = TableConfig::new().with_style("Pages", "text-align: right;");
    let table = Table::new(grid(), config).expect("table");
    let headers = table.headers();
    assert_eq!(headers.len(), 3);
    assert_eq!(headers[2].name(), "Pages");
    assert_eq!(headers[2].col_num(), 2);
    assert_eq!(headers[2].style(), Some("text-align: right;"));
    assert_eq!(headers[0].style(), None);
    assert_eq!(headers[0].to_string(), "Title");
}

#[test]
fn datum_style_lookup() {
    let config = TableConfig::new().with_style("Pages", "text-align: right;");
    let table = Table::new(grid(), config).expect("table");
    let row = table.row(0).expect("row 0");
    assert_eq!(
        row.datum("Pages").expect("pages").style(),
        Some("text-align: right;")
    );
    assert_eq!(row.datum("Title").expect("title").style(), None);
}
