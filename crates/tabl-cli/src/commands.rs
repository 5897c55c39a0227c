//! Subcommand implementations.

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ContentArrangement};

use tabl_model::Table;
use tabl_render::{to_csv, to_html, to_json, to_json_pretty};

use crate::cli::{ExportArgs, ExportFormatArg, FacetArgs, ShowArgs, TotalArgs};
use crate::selection::select_table;

pub fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let table = select_table(&args.select)?;
    print_terminal_table(&table)?;
    println!(
        "{} rows x {} columns",
        table.len(),
        table.columns().len()
    );
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let table = select_table(&args.select)?;
    let bytes: Vec<u8> = match args.format {
        ExportFormatArg::Html => to_html(&table)?.into_bytes(),
        ExportFormatArg::Csv => to_csv(&table)?,
        ExportFormatArg::Json if args.pretty => to_json_pretty(&table)?.into_bytes(),
        ExportFormatArg::Json => to_json(&table)?.into_bytes(),
    };
    match &args.output {
        Some(path) => fs::write(path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn run_facet(args: &FacetArgs) -> anyhow::Result<()> {
    let table = select_table(&args.select)?;
    let facets = table.facet_by(&args.by)?;
    for facet in &facets {
        let value = facet.faceted_on().unwrap_or("");
        println!("== {value} ({} rows)", facet.len());
        print_terminal_table(facet)?;
    }
    println!("{} facets of {:?}", facets.len(), args.by);
    Ok(())
}

pub fn run_total(args: &TotalArgs) -> anyhow::Result<()> {
    let table = select_table(&args.select)?;
    let sum = table.total(&args.column)?;
    println!("{}: {sum}", args.column);
    Ok(())
}

fn print_terminal_table(table: &Table) -> anyhow::Result<()> {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(table.columns().iter().map(Cell::new));
    for row in table.rows() {
        let mut cells = Vec::with_capacity(table.columns().len());
        for datum in row.data()? {
            cells.push(Cell::new(datum.display_value()?));
        }
        out.add_row(cells);
    }
    println!("{out}");
    Ok(())
}
