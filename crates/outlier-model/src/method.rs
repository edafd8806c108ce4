//! Outlier detection method selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Statistical rule used to flag outliers in a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlierMethod {
    /// Values outside `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`.
    Interquartile,
    /// Values whose absolute z-score exceeds 3.
    #[default]
    ZScore,
}

impl OutlierMethod {
    /// All supported methods, in declaration order.
    pub const ALL: [OutlierMethod; 2] = [OutlierMethod::Interquartile, OutlierMethod::ZScore];

    pub fn as_str(self) -> &'static str {
        match self {
            OutlierMethod::Interquartile => "interquartile",
            OutlierMethod::ZScore => "zscore",
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutlierMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interquartile" | "iqr" => Ok(OutlierMethod::Interquartile),
            "zscore" | "z-score" => Ok(OutlierMethod::ZScore),
            other => Err(ModelError::UnknownMethod(other.to_string())),
        }
    }
}
