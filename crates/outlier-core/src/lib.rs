//! Outlier classification for tabular data.
//!
//! This crate splits each numeric column of a Polars `DataFrame` into three
//! disjoint row sets and summarizes them:
//!
//! - **rules**: the interquartile and z-score outlier rules
//! - **subset**: owned row subsets keyed by source row position
//! - **partition**: the missing / outlier / non-outlier split and its invariant check
//! - **handler**: [`OutlierHandler`], the per-column and whole-table entry points
//! - **report**: column and dataset reports
//! - **render**: the plain-text report layout

pub mod error;
pub mod handler;
pub mod partition;
pub mod render;
pub mod report;
pub mod rules;
pub mod subset;

pub use error::{InvalidColumnReason, OutlierError, Result};
pub use handler::OutlierHandler;
pub use partition::ColumnPartition;
pub use render::{print_report, render_column, render_text};
pub use report::{ColumnReport, DatasetReport};
pub use subset::RowSubset;

// Re-export the model types callers need alongside the handler
pub use outlier_model::{
    ColumnSummary, DatasetSummary, DegenerateReason, OutlierMethod, ReportOptions, ReportWarning,
};
