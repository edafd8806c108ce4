use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown outlier method '{0}' (expected 'interquartile' or 'zscore')")]
    UnknownMethod(String),
}
