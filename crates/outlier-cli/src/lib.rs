//! CLI library components for the outlier report.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
