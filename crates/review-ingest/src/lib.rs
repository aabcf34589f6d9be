#![deny(unsafe_code)]

pub mod csv_table;
pub mod detect;
pub mod error;

pub use csv_table::{read_review_table, read_review_table_from_reader};
pub use detect::{ColumnScore, DetectedColumn, TEXT_COLUMN_KEYWORDS, column_scores, detect_text_column};
pub use error::{DetectionError, IngestError};
