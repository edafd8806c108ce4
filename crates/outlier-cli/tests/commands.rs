//! Integration tests for the CLI commands.

use std::io::Write;

use tempfile::NamedTempFile;

use outlier_cli::commands::{RowCategory, load_csv, run_report, select_rows};
use outlier_cli::summary::build_summary_table;
use outlier_common::is_numeric_dtype;
use outlier_core::{OutlierMethod, ReportOptions};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const MEASUREMENTS: &str = "\
subject,weight,site
S1,10,north
S2,12,north
S3,11,south
S4,13,south
S5,,east
S6,200,east
";

#[test]
fn load_csv_infers_numeric_columns() {
    let file = create_temp_csv(MEASUREMENTS);
    let df = load_csv(file.path()).unwrap();
    assert_eq!(df.height(), 6);
    assert_eq!(df.width(), 3);
    assert!(is_numeric_dtype(df.column("weight").unwrap().dtype()));
}

#[test]
fn load_csv_reports_missing_file() {
    let err = load_csv(std::path::Path::new("/nonexistent/data.csv")).unwrap_err();
    assert!(err.to_string().contains("data.csv"));
}

#[test]
fn run_report_skips_text_columns() {
    let file = create_temp_csv(MEASUREMENTS);
    let df = load_csv(file.path()).unwrap();
    let report = run_report(&df, OutlierMethod::Interquartile, &ReportOptions::default()).unwrap();

    assert_eq!(report.column_names(), vec!["weight"]);
    let weight = &report.get("weight").unwrap().summary;
    assert_eq!(weight.missing_count, 1);
    assert_eq!(weight.outlier_count, 1);
    assert_eq!(weight.non_outlier_count, 4);
    assert!(!report.has_invariant_violations());
}

#[test]
fn select_rows_returns_outlier_records() {
    let file = create_temp_csv(MEASUREMENTS);
    let df = load_csv(file.path()).unwrap();

    let outliers = select_rows(&df, "weight", RowCategory::Outliers, OutlierMethod::Interquartile)
        .unwrap();
    assert_eq!(outliers.rows(), &[5]);

    let missing = select_rows(&df, "weight", RowCategory::Missing, OutlierMethod::ZScore).unwrap();
    assert_eq!(missing.rows(), &[4]);

    let present =
        select_rows(&df, "weight", RowCategory::NonMissing, OutlierMethod::ZScore).unwrap();
    assert_eq!(present.len(), 5);
}

#[test]
fn select_rows_rejects_text_column() {
    let file = create_temp_csv(MEASUREMENTS);
    let df = load_csv(file.path()).unwrap();
    let err = select_rows(&df, "site", RowCategory::NonOutliers, OutlierMethod::ZScore)
        .unwrap_err();
    assert!(format!("{err:#}").contains("not numeric"));
}

#[test]
fn summary_table_lists_each_column() {
    let file = create_temp_csv(MEASUREMENTS);
    let df = load_csv(file.path()).unwrap();
    let report = run_report(&df, OutlierMethod::Interquartile, &ReportOptions::default()).unwrap();
    let rendered = build_summary_table(&report.summary()).to_string();
    assert!(rendered.contains("weight"));
    assert!(rendered.contains("16.6667"));
    assert!(rendered.contains("66.6667"));
}
