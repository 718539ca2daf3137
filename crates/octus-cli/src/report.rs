//! Terminal and JSON rendering of command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CsvSummary, NormalizedRow};

pub fn normalize_table(rows: &[NormalizedRow]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Kind"),
        header_cell("ISO date"),
        header_cell("Display"),
    ]);
    for row in rows {
        let iso = match (&row.iso, &row.reason) {
            (Some(iso), _) => Cell::new(iso).fg(Color::Green),
            (None, Some(reason)) => Cell::new(format!("unparseable ({reason})")).fg(Color::Red),
            (None, None) => Cell::new("unparseable").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&row.input),
            Cell::new(row.kind).add_attribute(Attribute::Dim),
            iso,
            Cell::new(&row.display),
        ]);
    }
    table
}

pub fn csv_summary_table(summary: &CsvSummary) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Normalized"),
        header_cell("Blank"),
        header_cell("Unparseable"),
    ]);
    let unparseable = Cell::new(summary.unparseable).set_alignment(CellAlignment::Right);
    let unparseable = if summary.unparseable > 0 {
        unparseable.fg(Color::Yellow)
    } else {
        unparseable
    };
    table.add_row(vec![
        Cell::new(summary.rows).set_alignment(CellAlignment::Right),
        Cell::new(summary.normalized).set_alignment(CellAlignment::Right),
        Cell::new(summary.blank).set_alignment(CellAlignment::Right),
        unparseable,
    ]);
    table
}

/// Pretty JSON array of rows.
pub fn rows_to_json(rows: &[NormalizedRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
