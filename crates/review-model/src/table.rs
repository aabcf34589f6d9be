use std::collections::BTreeMap;

use crate::error::{Result, TableError};
use crate::value::CellValue;

/// Derived column added by sentiment classification.
pub const SENTIMENT_COLUMN: &str = "sentiment";
/// Derived column added by topic classification.
pub const TOPIC_COLUMN: &str = "topic";
/// Derived column added by feedback-type classification (heuristic strategy only).
pub const TYPE_COLUMN: &str = "type";

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }
}

/// An in-memory review table: named columns in source order plus row maps.
///
/// The table is immutable after ingestion except for derived columns appended
/// during classification.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReviewTable {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ReviewTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Returns one value per row for the named column; rows without a stored
    /// cell yield `Missing`.
    pub fn column_values(&self, name: &str) -> Result<Vec<CellValue>> {
        if !self.has_column(name) {
            return Err(TableError::UnknownColumn(name.to_string()));
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(name).cloned().unwrap_or(CellValue::Missing))
            .collect())
    }

    /// Appends a derived column, one value per row.
    ///
    /// The append is all-or-nothing: the column list and row cells are only
    /// touched once the value count is known to match.
    pub fn append_column(&mut self, name: &str, values: Vec<CellValue>) -> Result<()> {
        if self.has_column(name) {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLengthMismatch {
                column: name.to_string(),
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(name, value);
        }
        Ok(())
    }

    /// Returns a copy restricted to the named columns, preserving row order.
    /// Columns absent from the table are skipped.
    pub fn select_columns(&self, names: &[&str]) -> ReviewTable {
        let columns: Vec<String> = names
            .iter()
            .filter(|name| self.has_column(name))
            .map(|name| (*name).to_string())
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = BTreeMap::new();
                for column in &columns {
                    let value = row.get(column).cloned().unwrap_or(CellValue::Missing);
                    cells.insert(column.clone(), value);
                }
                Row { cells }
            })
            .collect();
        ReviewTable { columns, rows }
    }
}
