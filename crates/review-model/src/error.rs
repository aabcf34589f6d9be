use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("column {column}: expected {expected} values, got {actual}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("column already exists: {0}")]
    DuplicateColumn(String),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
