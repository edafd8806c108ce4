//! Configuration options for dataset outlier reports.

use serde::{Deserialize, Serialize};

/// Options controlling `get_outliers_information`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Restrict the report to these columns. `None` reports every numeric column.
    pub columns: Option<Vec<String>>,

    /// Attach the missing/outlier/non-outlier sub-tables to each column report.
    /// Default: true.
    pub include_subtables: bool,

    /// Print the textual summary to stdout once the report is built.
    /// Default: true.
    pub log: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            columns: None,
            include_subtables: true,
            log: true,
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for callers that only want the numbers: no sub-tables, no printing.
    pub fn summary_only() -> Self {
        Self {
            columns: None,
            include_subtables: false,
            log: false,
        }
    }

    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_subtables(mut self, enable: bool) -> Self {
        self.include_subtables = enable;
        self
    }

    pub fn with_log(mut self, enable: bool) -> Self {
        self.log = enable;
        self
    }

    /// Whether the column filter admits `name`. An empty filter admits everything.
    pub fn includes(&self, name: &str) -> bool {
        match &self.columns {
            Some(columns) if !columns.is_empty() => columns.iter().any(|c| c == name),
            _ => true,
        }
    }
}
