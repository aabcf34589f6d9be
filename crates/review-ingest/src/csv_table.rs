use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use review_model::{CellValue, ReviewTable, Row};

use crate::error::IngestError;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Types a raw CSV cell: empty becomes `Missing`, numeric text becomes
/// `Number`, everything else stays `Text`.
fn typed_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return CellValue::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(number) => CellValue::Number(number),
        Err(_) => CellValue::Text(trimmed.to_string()),
    }
}

/// Reads a review CSV file into a typed table.
pub fn read_review_table(path: &Path) -> Result<ReviewTable, IngestError> {
    let file = File::open(path)?;
    read_review_table_from_reader(file)
}

/// Reads review CSV data from any byte stream. Expects a header row; short
/// records are padded with missing cells and fully blank rows are skipped.
pub fn read_review_table_from_reader<R: Read>(reader: R) -> Result<ReviewTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader);
    }

    let mut table = ReviewTable::new(headers.clone());
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Row::default();
        for (idx, header) in headers.iter().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            row.insert(header.clone(), typed_cell(raw));
        }
        table.push_row(row);
    }

    if table.is_empty() {
        return Err(IngestError::Empty);
    }
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded review table"
    );
    Ok(table)
}
