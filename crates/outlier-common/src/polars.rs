//! Polars value helpers.
//!
//! This module provides helper functions for working with Polars columns:
//! deciding whether a column is numeric, pulling its values out as `f64`,
//! and formatting floating-point numbers for reports.

use polars::prelude::{Column, DataType, PolarsResult};

/// Returns true for the integer, floating-point and boolean data types.
///
/// Booleans count as numeric and are read as `0.0`/`1.0`. Strings, temporal
/// and nested types are not numeric.
///
/// # Examples
///
/// ```
/// use polars::prelude::DataType;
/// use outlier_common::is_numeric_dtype;
///
/// assert!(is_numeric_dtype(&DataType::Int32));
/// assert!(is_numeric_dtype(&DataType::Float64));
/// assert!(!is_numeric_dtype(&DataType::String));
/// assert!(is_numeric_dtype(&DataType::Boolean));
/// ```
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Boolean
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// A value counts as missing when it is null or a floating-point NaN.
pub fn is_missing(value: Option<f64>) -> bool {
    value.is_none_or(f64::is_nan)
}

/// Extracts every value of a numeric column as `Option<f64>`, one entry per row.
///
/// The column is cast to `Float64` first, so integer columns are widened.
///
/// # Errors
///
/// Returns the Polars error if the column cannot be cast to `Float64`.
pub fn column_f64_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}

/// Formats a float in its shortest round-trip form, keeping at least one
/// decimal place for whole numbers.
///
/// # Examples
///
/// ```
/// use outlier_common::format_float;
///
/// assert_eq!(format_float(50.0), "50.0");
/// assert_eq!(format_float(16.6667), "16.6667");
/// assert_eq!(format_float(0.0), "0.0");
/// ```
pub fn format_float(v: f64) -> String {
    let s = format!("{v}");
    if v.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}
