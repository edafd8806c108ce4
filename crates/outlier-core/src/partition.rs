//! Missing / outlier / non-outlier partition of one column.

use std::collections::BTreeMap;

use outlier_model::{CategoryCounts, DegenerateReason, ReportWarning};
use polars::prelude::IdxSize;

use crate::subset::RowSubset;

/// The three row subsets of one column.
///
/// Every source row is expected in exactly one subset; [`ColumnPartition::verify`]
/// checks this rather than assuming it.
#[derive(Debug, Clone)]
pub struct ColumnPartition {
    pub column: String,
    pub missing: RowSubset,
    pub outliers: RowSubset,
    pub non_outliers: RowSubset,
    pub(crate) degenerate: Option<DegenerateReason>,
}

impl ColumnPartition {
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            missing: self.missing.len(),
            outliers: self.outliers.len(),
            non_outliers: self.non_outliers.len(),
        }
    }

    /// Degenerate fallback taken by the outlier rule, if any.
    pub fn degenerate(&self) -> Option<DegenerateReason> {
        self.degenerate
    }

    /// Number of row identities present in more than one subset.
    pub fn overlapping_rows(&self) -> usize {
        let mut seen: BTreeMap<IdxSize, u8> = BTreeMap::new();
        for subset in [&self.missing, &self.outliers, &self.non_outliers] {
            for row in subset.rows() {
                *seen.entry(*row).or_default() += 1;
            }
        }
        seen.values().filter(|count| **count > 1).count()
    }

    /// All row identities across the three subsets, ascending and deduplicated.
    pub fn union_rows(&self) -> Vec<IdxSize> {
        let mut rows: Vec<IdxSize> = [&self.missing, &self.outliers, &self.non_outliers]
            .into_iter()
            .flat_map(|subset| subset.rows().iter().copied())
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// Check that the subsets are disjoint and cover `total_rows` rows.
    pub fn verify(&self, total_rows: usize) -> Option<ReportWarning> {
        let classified_rows = self.counts().total();
        let overlapping_rows = self.overlapping_rows();
        if classified_rows == total_rows && overlapping_rows == 0 {
            return None;
        }
        Some(ReportWarning::InvariantViolation {
            column: self.column.clone(),
            total_rows,
            classified_rows,
            overlapping_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

    fn source() -> DataFrame {
        DataFrame::new(vec![
            Series::new("v".into(), &[1.0, 2.0, 3.0, 4.0]).into_column(),
        ])
        .unwrap()
    }

    fn partition(
        missing: Vec<IdxSize>,
        outliers: Vec<IdxSize>,
        normal: Vec<IdxSize>,
    ) -> ColumnPartition {
        let df = source();
        ColumnPartition {
            column: "v".to_string(),
            missing: RowSubset::take(&df, missing).unwrap(),
            outliers: RowSubset::take(&df, outliers).unwrap(),
            non_outliers: RowSubset::take(&df, normal).unwrap(),
            degenerate: None,
        }
    }

    #[test]
    fn consistent_partition_verifies() {
        let partition = partition(vec![0], vec![3], vec![1, 2]);
        assert_eq!(partition.verify(4), None);
        assert_eq!(partition.union_rows(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn overlapping_partition_is_reported() {
        let partition = partition(vec![0], vec![2], vec![1, 2]);
        assert_eq!(partition.overlapping_rows(), 1);
        assert_eq!(
            partition.verify(3),
            Some(ReportWarning::InvariantViolation {
                column: "v".to_string(),
                total_rows: 3,
                classified_rows: 4,
                overlapping_rows: 1,
            })
        );
    }

    #[test]
    fn short_partition_is_reported() {
        let partition = partition(vec![], vec![3], vec![1, 2]);
        let warning = partition.verify(4).unwrap();
        assert!(warning.is_invariant_violation());
    }
}
