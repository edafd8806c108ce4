pub mod error;
pub mod method;
pub mod options;
pub mod summary;
pub mod warning;

pub use error::ModelError;
pub use method::OutlierMethod;
pub use options::ReportOptions;
pub use summary::{
    CategoryCounts, ColumnSummary, DatasetSummary, PERCENTAGE_DIGITS, percentage,
};
pub use warning::{DegenerateReason, ReportWarning};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_percentages_use_total_rows() {
        let summary = ColumnSummary::new(
            "age",
            6,
            CategoryCounts {
                missing: 1,
                outliers: 1,
                non_outliers: 4,
            },
        );
        assert_eq!(summary.missing_percentage, 16.6667);
        assert_eq!(summary.outlier_percentage, 16.6667);
        assert_eq!(summary.non_outlier_percentage, 66.6667);
        assert_eq!(summary.classified_rows(), 6);
        assert!(!summary.has_invariant_violation());
    }

    #[test]
    fn summary_serializes_with_report_field_names() {
        let summary = ColumnSummary::new(
            "x",
            4,
            CategoryCounts {
                missing: 0,
                outliers: 1,
                non_outliers: 3,
            },
        );
        let json = serde_json::to_value(&summary).expect("serialize summary");
        assert_eq!(json["outlier_count"], 1);
        assert_eq!(json["outlier_percentage"], 25.0);
        assert_eq!(json["non_outlier_percentage"], 75.0);
        assert!(json.get("warnings").is_none());
    }
}
