//! Report configuration loaded from TOML.
//!
//! ```toml
//! method = "interquartile"
//!
//! [report]
//! columns = ["weight", "height"]
//! include_subtables = false
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use outlier_model::{OutlierMethod, ReportOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub method: OutlierMethod,
    pub report: ReportOptions,
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply command-line overrides; empty `columns` keeps the configured filter.
    #[must_use]
    pub fn with_overrides(mut self, method: Option<OutlierMethod>, columns: Vec<String>) -> Self {
        if let Some(method) = method {
            self.method = method;
        }
        if !columns.is_empty() {
            self.report.columns = Some(columns);
        }
        self
    }
}
