use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use outlier_common::format_float;
use outlier_model::{ColumnSummary, DatasetSummary};

pub fn print_summary_table(summary: &DatasetSummary) {
    println!("Method: {}", summary.method);
    println!("Rows: {}", summary.total_rows);
    println!("{}", build_summary_table(summary));
    print_warnings(summary);
}

pub fn build_summary_table(summary: &DatasetSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Missing %"),
        header_cell("Outliers"),
        header_cell("Outlier %"),
        header_cell("Normal"),
        header_cell("Normal %"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &summary.columns {
        table.add_row(summary_row(column));
    }
    table
}

fn summary_row(column: &ColumnSummary) -> Vec<Cell> {
    vec![
        Cell::new(&column.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        count_cell(column.missing_count, Color::Yellow),
        dim_cell(format_float(column.missing_percentage)),
        count_cell(column.outlier_count, Color::Red),
        dim_cell(format_float(column.outlier_percentage)),
        Cell::new(column.non_outlier_count),
        dim_cell(format_float(column.non_outlier_percentage)),
        count_cell(column.warnings.len(), Color::Yellow),
    ]
}

fn print_warnings(summary: &DatasetSummary) {
    if summary.warning_count() == 0 {
        return;
    }
    eprintln!("Warnings:");
    for warning in summary.columns.iter().flat_map(|column| &column.warnings) {
        eprintln!("- {warning}");
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
