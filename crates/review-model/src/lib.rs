#![deny(unsafe_code)]

pub mod error;
pub mod table;
pub mod value;
pub mod view;

pub use error::{Result, TableError};
pub use table::{ReviewTable, Row, SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN};
pub use value::CellValue;
pub use view::{Selection, ViewFilter};
