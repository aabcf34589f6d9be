use thiserror::Error;

/// Errors during webhook delivery. These are reported to the user as a
/// message; the annotated view stays usable.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid webhook URL: {0}")]
    InvalidUrl(String),
    #[error("webhook delivery failed: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
