use thiserror::Error;

/// Failures while loading an uploaded review file.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("file has no header row")]
    NoHeader,
    #[error("file contains no data rows")]
    Empty,
}

/// Failure of the text-column detector.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("no suitable text column found; the file does not contain review-like data")]
    NoTextColumn,
}
