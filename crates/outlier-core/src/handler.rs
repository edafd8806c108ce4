//! Per-column classification into missing, outlier and non-outlier rows.

use outlier_common::{column_f64_values, is_missing, is_numeric_dtype};
use outlier_model::{ColumnSummary, DegenerateReason, OutlierMethod, ReportOptions, ReportWarning};
use polars::prelude::{DataFrame, IdxSize};
use tracing::{debug, info_span, warn};

use crate::error::{OutlierError, Result};
use crate::partition::ColumnPartition;
use crate::render::print_report;
use crate::report::{ColumnReport, DatasetReport};
use crate::rules::{self, RuleOutcome};
use crate::subset::RowSubset;

/// Classifies numeric columns with one fixed outlier method.
///
/// Every operation reads the table and returns owned sub-tables; the
/// source DataFrame is never modified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlierHandler {
    method: OutlierMethod,
}

/// Non-missing values of a column, paired with their source rows.
struct PresentValues {
    rows: Vec<IdxSize>,
    values: Vec<f64>,
}

impl OutlierHandler {
    pub fn new(method: OutlierMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> OutlierMethod {
        self.method
    }

    /// Rows where `column` has no value.
    pub fn get_missing(&self, df: &DataFrame, column: &str) -> Result<RowSubset> {
        let values = numeric_values(df, column)?;
        let keep: Vec<bool> = values.iter().map(|value| is_missing(*value)).collect();
        Ok(RowSubset::filter(df, &keep)?)
    }

    /// Rows where `column` has a value.
    pub fn get_non_missing(&self, df: &DataFrame, column: &str) -> Result<RowSubset> {
        let values = numeric_values(df, column)?;
        let keep: Vec<bool> = values.iter().map(|value| !is_missing(*value)).collect();
        Ok(RowSubset::filter(df, &keep)?)
    }

    /// Non-missing rows flagged by the configured rule.
    pub fn get_outliers(&self, df: &DataFrame, column: &str) -> Result<RowSubset> {
        let present = present_values(numeric_values(df, column)?);
        let outcome = self.run_rule(column, &present.values);
        Ok(RowSubset::take(df, flagged_rows(&present, &outcome))?)
    }

    /// Non-missing rows that are not outliers.
    pub fn get_non_outliers(&self, df: &DataFrame, column: &str) -> Result<RowSubset> {
        let non_missing = self.get_non_missing(df, column)?;
        let outliers = self.get_outliers(df, column)?;
        Ok(non_missing.exclude(&outliers)?)
    }

    /// Compute all three subsets of `column`, running the rule once.
    pub fn classify(&self, df: &DataFrame, column: &str) -> Result<ColumnPartition> {
        let values = numeric_values(df, column)?;
        let missing_mask: Vec<bool> = values.iter().map(|value| is_missing(*value)).collect();
        let present_mask: Vec<bool> = missing_mask.iter().map(|missing| !missing).collect();

        let present = present_values(values);
        let outcome = self.run_rule(column, &present.values);

        let missing = RowSubset::filter(df, &missing_mask)?;
        let non_missing = RowSubset::filter(df, &present_mask)?;
        let outliers = RowSubset::take(df, flagged_rows(&present, &outcome))?;
        let non_outliers = non_missing.exclude(&outliers)?;

        debug!(
            column,
            method = %self.method,
            missing = missing.len(),
            outliers = outliers.len(),
            non_outliers = non_outliers.len(),
            "classified column"
        );

        Ok(ColumnPartition {
            column: column.to_string(),
            missing,
            outliers,
            non_outliers,
            degenerate: outcome.degenerate,
        })
    }

    /// Classify every numeric column admitted by `options` and summarize it.
    ///
    /// Non-numeric columns and columns outside the filter are skipped without
    /// an entry. Degenerate statistics and partition mismatches are recorded
    /// as warnings on the affected column and never abort the report.
    pub fn get_outliers_information(
        &self,
        df: &DataFrame,
        options: &ReportOptions,
    ) -> Result<DatasetReport> {
        let total_rows = df.height();
        let span = info_span!("outlier_report", method = %self.method, rows = total_rows);
        let _guard = span.enter();

        if let Some(columns) = &options.columns {
            for name in columns {
                if df.column(name).is_err() {
                    debug!(column = %name, "requested column not in table, skipping");
                }
            }
        }

        let mut report = DatasetReport::new(self.method, total_rows);
        for column in df.get_columns() {
            let name = column.name().as_str();
            if !is_numeric_dtype(column.dtype()) || !options.includes(name) {
                continue;
            }
            let partition = self.classify(df, name)?;
            let column_report =
                build_column_report(partition, total_rows, options.include_subtables);
            for warning in column_report.warnings() {
                warn!(column = warning.column(), %warning, "outlier report warning");
            }
            report.push(column_report);
        }

        if options.log {
            print_report(&report);
        }
        Ok(report)
    }

    fn run_rule(&self, column: &str, values: &[f64]) -> RuleOutcome {
        let outcome = rules::detect(self.method, values);
        if let Some(reason) = outcome.degenerate {
            debug!(column, reason = reason.as_str(), "degenerate statistics, no outliers");
        }
        outcome
    }
}

fn build_column_report(
    partition: ColumnPartition,
    total_rows: usize,
    include_subtables: bool,
) -> ColumnReport {
    let mut warnings = Vec::new();
    if let Some(reason) = partition.degenerate() {
        warnings.push(degenerate_warning(&partition.column, reason));
    }
    if total_rows == 0 {
        warnings.push(degenerate_warning(&partition.column, DegenerateReason::EmptyTable));
    }
    if let Some(violation) = partition.verify(total_rows) {
        warnings.push(violation);
    }
    let summary = ColumnSummary::new(partition.column.clone(), total_rows, partition.counts())
        .with_warnings(warnings);
    ColumnReport {
        summary,
        partition: include_subtables.then_some(partition),
    }
}

fn degenerate_warning(column: &str, reason: DegenerateReason) -> ReportWarning {
    ReportWarning::DegenerateStatistics {
        column: column.to_string(),
        reason,
    }
}

/// Look up `column` and read it as `f64`, rejecting absent and non-numeric columns.
fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(column)
        .map_err(|_| OutlierError::not_found(column))?;
    if !is_numeric_dtype(series.dtype()) {
        return Err(OutlierError::not_numeric(column, series.dtype()));
    }
    Ok(column_f64_values(series)?)
}

fn present_values(values: Vec<Option<f64>>) -> PresentValues {
    let mut present = PresentValues {
        rows: Vec::with_capacity(values.len()),
        values: Vec::with_capacity(values.len()),
    };
    for (idx, value) in values.into_iter().enumerate() {
        if let Some(value) = value.filter(|v| !v.is_nan()) {
            present.rows.push(idx as IdxSize);
            present.values.push(value);
        }
    }
    present
}

fn flagged_rows(present: &PresentValues, outcome: &RuleOutcome) -> Vec<IdxSize> {
    outcome.flagged.iter().map(|pos| present.rows[*pos]).collect()
}
