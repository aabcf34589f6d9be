use thiserror::Error;

/// Errors raised while classifying a review table.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Remote service call failed; the whole classification pass is aborted.
    #[error("remote classification failed: {0}")]
    Remote(String),

    /// Remote strategy configuration is incomplete.
    #[error("missing configuration: {0}")]
    Config(String),

    /// Table operation failed while appending derived columns.
    #[error(transparent)]
    Table(#[from] review_model::TableError),

    /// A classifier broke the one-annotation-per-row contract.
    #[error("classifier produced {actual} annotations for {expected} rows")]
    AnnotationCount { expected: usize, actual: usize },
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote(err.to_string())
    }
}
