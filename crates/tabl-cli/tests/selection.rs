//! Selection parsing and application.

use std::fs;

use tabl_cli::cli::SelectArgs;
use tabl_cli::selection::{WhereClause, load_table, parse_where, select_table};
use tempfile::TempDir;

const BOOKS_CSV: &str = "\
Author,Best Book,Number of Pages,Style
Samuel Beckett,Malone Muert,120,Modernism
James Joyce,Ulysses,644,Modernism
Nicholson Baker,Mezannine,150,Minimalism
Vladimir Sorokin,The Queue,263,Satire
";

fn books_file(dir: &TempDir) -> String {
    let path = dir.path().join("books.csv");
    fs::write(&path, BOOKS_CSV).expect("write csv");
    path.display().to_string()
}

#[test]
fn parse_where_splits_on_first_equals() {
    assert_eq!(
        parse_where("Style=Modernism").expect("clause"),
        WhereClause {
            column: "Style".to_string(),
            value: "Modernism".to_string(),
        }
    );
    // Values may themselves contain '='.
    assert_eq!(
        parse_where("Formula=a=b").expect("clause"),
        WhereClause {
            column: "Formula".to_string(),
            value: "a=b".to_string(),
        }
    );
    assert!(parse_where("no-equals").is_err());
    assert!(parse_where("=value").is_err());
}

#[test]
fn load_table_from_file_source() {
    let dir = TempDir::new().expect("temp dir");
    let table = load_table(&books_file(&dir)).expect("load");
    assert_eq!(table.len(), 4);
}

#[test]
fn selection_filters_sorts_and_restricts_columns() {
    let dir = TempDir::new().expect("temp dir");
    let args = SelectArgs {
        source: books_file(&dir),
        filters: vec!["Style=Modernism".to_string()],
        sort_by: Some("Number of Pages".to_string()),
        reverse: true,
        columns: Some(vec!["Author".to_string(), "Number of Pages".to_string()]),
    };
    let table = select_table(&args).expect("select");
    assert_eq!(table.len(), 2);
    assert_eq!(table.columns(), ["Author", "Number of Pages"]);
    assert_eq!(
        table.values("Author").expect("authors"),
        ["James Joyce", "Samuel Beckett"]
    );
}

#[test]
fn selection_reports_unknown_filter_column() {
    let dir = TempDir::new().expect("temp dir");
    let args = SelectArgs {
        source: books_file(&dir),
        filters: vec!["Nope=x".to_string()],
        sort_by: None,
        reverse: false,
        columns: None,
    };
    let err = select_table(&args).unwrap_err();
    assert!(err.to_string().contains("Nope"));
}
