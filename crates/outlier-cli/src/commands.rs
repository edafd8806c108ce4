use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{info, info_span};

use outlier_core::{DatasetReport, OutlierHandler, OutlierMethod, ReportOptions, RowSubset};

use crate::summary::apply_table_style;

/// Which row subset of a column to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCategory {
    Missing,
    NonMissing,
    Outliers,
    NonOutliers,
}

/// Read a CSV file with a header row into a DataFrame.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open {}", path.display()))?
        .finish()
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(df)
}

/// Build the dataset report without printing it; the caller picks the format.
pub fn run_report(
    df: &DataFrame,
    method: OutlierMethod,
    options: &ReportOptions,
) -> Result<DatasetReport> {
    let span = info_span!("report", method = %method, rows = df.height(), columns = df.width());
    let _guard = span.enter();
    let start = Instant::now();
    let options = options.clone().with_log(false);
    let report = OutlierHandler::new(method)
        .get_outliers_information(df, &options)
        .context("build outlier report")?;
    info!(
        columns = report.len(),
        warnings = report.warnings().count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "report complete"
    );
    Ok(report)
}

/// Select one category of rows for `column`.
pub fn select_rows(
    df: &DataFrame,
    column: &str,
    category: RowCategory,
    method: OutlierMethod,
) -> Result<RowSubset> {
    let handler = OutlierHandler::new(method);
    let subset = match category {
        RowCategory::Missing => handler.get_missing(df, column),
        RowCategory::NonMissing => handler.get_non_missing(df, column),
        RowCategory::Outliers => handler.get_outliers(df, column),
        RowCategory::NonOutliers => handler.get_non_outliers(df, column),
    }
    .with_context(|| format!("select {category:?} rows of '{column}'"))?;
    Ok(subset)
}

/// Print the supported methods and their rules.
pub fn run_methods() {
    let mut table = Table::new();
    table.set_header(vec!["Method", "Rule"]);
    apply_table_style(&mut table);
    for method in OutlierMethod::ALL {
        let rule = match method {
            OutlierMethod::Interquartile => "v < Q1 - 1.5 * IQR or v > Q3 + 1.5 * IQR",
            OutlierMethod::ZScore => "|v - mean| / std > 3 (population std)",
        };
        table.add_row(vec![method.as_str(), rule]);
    }
    println!("{table}");
}
