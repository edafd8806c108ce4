//! Recoverable conditions attached to a column report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a statistic fell back to its degenerate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateReason {
    /// Standard deviation is zero, so every z-score is taken as 0.
    ZeroVariance,
    /// The table has no rows, so every percentage is taken as 0.0.
    EmptyTable,
}

impl DegenerateReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DegenerateReason::ZeroVariance => "zero variance",
            DegenerateReason::EmptyTable => "empty table",
        }
    }
}

/// A warning raised while classifying a column.
///
/// Warnings never abort a dataset report; they travel with the column
/// summary so the caller can inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportWarning {
    DegenerateStatistics {
        column: String,
        reason: DegenerateReason,
    },
    /// The missing, outlier and non-outlier sets do not partition the rows.
    InvariantViolation {
        column: String,
        total_rows: usize,
        classified_rows: usize,
        overlapping_rows: usize,
    },
}

impl ReportWarning {
    pub fn column(&self) -> &str {
        match self {
            ReportWarning::DegenerateStatistics { column, .. }
            | ReportWarning::InvariantViolation { column, .. } => column,
        }
    }

    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, ReportWarning::InvariantViolation { .. })
    }
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportWarning::DegenerateStatistics { column, reason } => {
                write!(f, "column '{column}': degenerate statistics ({})", reason.as_str())
            }
            ReportWarning::InvariantViolation {
                column,
                total_rows,
                classified_rows,
                overlapping_rows,
            } => write!(
                f,
                "column '{column}': value counts do not match \
                 ({classified_rows} classified of {total_rows} rows, {overlapping_rows} overlapping)"
            ),
        }
    }
}
