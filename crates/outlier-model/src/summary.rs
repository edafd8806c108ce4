//! Per-column counts and percentages.

use serde::{Deserialize, Serialize};

use crate::method::OutlierMethod;
use crate::warning::ReportWarning;

/// Number of decimal digits kept in report percentages.
pub const PERCENTAGE_DIGITS: u32 = 4;

/// Returns `100 * part / whole` rounded to `digits` decimal places.
///
/// A zero `whole` yields `0.0` instead of dividing by zero.
///
/// # Examples
///
/// ```
/// use outlier_model::percentage;
///
/// assert_eq!(percentage(1, 6, 4), 16.6667);
/// assert_eq!(percentage(3, 6, 4), 50.0);
/// assert_eq!(percentage(0, 0, 4), 0.0);
/// ```
pub fn percentage(part: usize, whole: usize, digits: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let factor = 10f64.powi(digits as i32);
    (100.0 * part as f64 / whole as f64 * factor).round() / factor
}

/// Row counts for the three classification categories of one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub missing: usize,
    pub outliers: usize,
    pub non_outliers: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.missing + self.outliers + self.non_outliers
    }
}

/// Counts and percentages for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub total_rows: usize,
    pub missing_count: usize,
    pub missing_percentage: f64,
    pub outlier_count: usize,
    pub outlier_percentage: f64,
    pub non_outlier_count: usize,
    pub non_outlier_percentage: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ReportWarning>,
}

impl ColumnSummary {
    /// Build a summary, computing every percentage against `total_rows`.
    pub fn new(column: impl Into<String>, total_rows: usize, counts: CategoryCounts) -> Self {
        Self {
            column: column.into(),
            total_rows,
            missing_count: counts.missing,
            missing_percentage: percentage(counts.missing, total_rows, PERCENTAGE_DIGITS),
            outlier_count: counts.outliers,
            outlier_percentage: percentage(counts.outliers, total_rows, PERCENTAGE_DIGITS),
            non_outlier_count: counts.non_outliers,
            non_outlier_percentage: percentage(
                counts.non_outliers,
                total_rows,
                PERCENTAGE_DIGITS,
            ),
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<ReportWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            missing: self.missing_count,
            outliers: self.outlier_count,
            non_outliers: self.non_outlier_count,
        }
    }

    /// Sum of the three category counts.
    pub fn classified_rows(&self) -> usize {
        self.counts().total()
    }

    /// Sum of the three category percentages.
    pub fn percentage_total(&self) -> f64 {
        self.missing_percentage + self.outlier_percentage + self.non_outlier_percentage
    }

    pub fn has_invariant_violation(&self) -> bool {
        self.warnings
            .iter()
            .any(ReportWarning::is_invariant_violation)
    }
}

/// Serializable view of a whole dataset report: the per-column summaries
/// without any sub-tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub method: OutlierMethod,
    pub total_rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    pub fn get(&self, column: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|summary| summary.column == column)
    }

    pub fn warning_count(&self) -> usize {
        self.columns.iter().map(|summary| summary.warnings.len()).sum()
    }
}
