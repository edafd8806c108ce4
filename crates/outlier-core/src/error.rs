#![deny(unsafe_code)]

use polars::prelude::{DataType, PolarsError};

/// Why a column cannot be classified.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidColumnReason {
    NotFound,
    NotNumeric { dtype: DataType },
}

#[derive(Debug, thiserror::Error)]
pub enum OutlierError {
    #[error("invalid column '{column}': {}", describe(.reason))]
    InvalidColumn {
        column: String,
        reason: InvalidColumnReason,
    },

    #[error("failed to derive sub-table: {0}")]
    Polars(#[from] PolarsError),
}

impl OutlierError {
    pub(crate) fn not_found(column: &str) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
            reason: InvalidColumnReason::NotFound,
        }
    }

    pub(crate) fn not_numeric(column: &str, dtype: &DataType) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
            reason: InvalidColumnReason::NotNumeric {
                dtype: dtype.clone(),
            },
        }
    }

    pub fn is_invalid_column(&self) -> bool {
        matches!(self, Self::InvalidColumn { .. })
    }
}

fn describe(reason: &InvalidColumnReason) -> String {
    match reason {
        InvalidColumnReason::NotFound => "not found in table".to_string(),
        InvalidColumnReason::NotNumeric { dtype } => format!("not numeric (dtype {dtype})"),
    }
}

pub type Result<T> = std::result::Result<T, OutlierError>;
