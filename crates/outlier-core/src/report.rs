//! Column and dataset reports.

use outlier_model::{ColumnSummary, DatasetSummary, OutlierMethod, ReportWarning};

use crate::partition::ColumnPartition;

/// Counts and percentages for one column, optionally with its sub-tables.
#[derive(Debug, Clone)]
pub struct ColumnReport {
    pub summary: ColumnSummary,
    pub partition: Option<ColumnPartition>,
}

impl ColumnReport {
    pub fn column(&self) -> &str {
        &self.summary.column
    }

    pub fn warnings(&self) -> &[ReportWarning] {
        &self.summary.warnings
    }
}

/// Per-column reports for a whole table, in the table's column order.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    pub method: OutlierMethod,
    pub total_rows: usize,
    columns: Vec<ColumnReport>,
}

impl DatasetReport {
    pub fn new(method: OutlierMethod, total_rows: usize) -> Self {
        Self {
            method,
            total_rows,
            columns: Vec::new(),
        }
    }

    pub fn push(&mut self, report: ColumnReport) {
        self.columns.push(report);
    }

    pub fn get(&self, column: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|report| report.column() == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnReport> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnReport::column).collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ReportWarning> {
        self.columns.iter().flat_map(ColumnReport::warnings)
    }

    pub fn has_invariant_violations(&self) -> bool {
        self.warnings().any(ReportWarning::is_invariant_violation)
    }

    /// Drop the sub-tables and keep the serializable numbers.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            method: self.method,
            total_rows: self.total_rows,
            columns: self
                .columns
                .iter()
                .map(|report| report.summary.clone())
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DatasetReport {
    type Item = &'a ColumnReport;
    type IntoIter = std::slice::Iter<'a, ColumnReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
