//! Shared utilities for the outlier crates.
//!
//! This crate provides the Polars helpers used across the workspace:
//! numeric column detection, `f64` extraction and number formatting.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{column_f64_values, format_float, is_missing, is_numeric_dtype};
