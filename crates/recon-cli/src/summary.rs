use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recon_model::SkipStats;

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Accepted"),
        header_cell("Records"),
        header_cell("Empty"),
        header_cell("Duplicate"),
        header_cell("Bad Qty"),
        header_cell("Errors"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    let mut total_records = 0usize;
    let mut totals = SkipStats::default();
    for summary in &result.sources {
        total_rows += summary.rows;
        total_records += summary.records;
        totals.merge(&summary.stats);
        table.add_row(vec![
            Cell::new(&summary.source)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.rows),
            Cell::new(summary.stats.accepted),
            Cell::new(summary.records),
            count_cell(summary.stats.empty, Color::Yellow),
            count_cell(summary.stats.duplicate, Color::Yellow),
            count_cell(summary.stats.invalid_quantity, Color::Yellow),
            count_cell(summary.stats.error, Color::Red),
            match &summary.output {
                Some(path) => Cell::new(path.display()),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(totals.accepted).add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        count_cell(totals.empty, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals.duplicate, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals.invalid_quantity, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals.error, Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
