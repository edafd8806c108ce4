//! Plain-text rendering of outlier reports.

use outlier_common::format_float;
use outlier_model::ColumnSummary;

use crate::report::DatasetReport;

/// Width the row labels are padded to.
pub const LABEL_WIDTH: usize = 25;

/// Render one column block, terminated by a blank line.
pub fn render_column(summary: &ColumnSummary) -> String {
    let rows = [
        ("Missing Values = ", summary.missing_count, summary.missing_percentage),
        ("Outlier Values = ", summary.outlier_count, summary.outlier_percentage),
        (
            "Non Outlier Values = ",
            summary.non_outlier_count,
            summary.non_outlier_percentage,
        ),
    ];
    let mut out = format!("{}\n", summary.column);
    for (label, count, pct) in rows {
        out.push_str(&format!(
            "{label:<width$}{count} ({} %)\n",
            format_float(pct),
            width = LABEL_WIDTH
        ));
    }
    out.push('\n');
    out
}

/// Render every column of the report in order.
pub fn render_text(report: &DatasetReport) -> String {
    report
        .iter()
        .map(|column| render_column(&column.summary))
        .collect()
}

/// Print the rendered report to stdout.
pub fn print_report(report: &DatasetReport) {
    print!("{}", render_text(report));
}
