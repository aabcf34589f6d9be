//! Webhook payload construction.

use serde_json::{Map, Value};

use review_model::{CellValue, ReviewTable, SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN};

/// Builds the webhook body: one JSON object per row, in row order, holding
/// the text column plus whichever derived columns the active strategy added.
pub fn build_payload(table: &ReviewTable, text_column: &str) -> Vec<Value> {
    let restricted =
        table.select_columns(&[text_column, SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN]);

    restricted
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            for column in &restricted.columns {
                let value = row.get(column).map_or(Value::Null, cell_to_json);
                record.insert(column.clone(), value);
            }
            Value::Object(record)
        })
        .collect()
}

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Text(text) => Value::String(text.clone()),
        CellValue::Number(number) => {
            serde_json::Number::from_f64(*number).map_or(Value::Null, Value::Number)
        }
        CellValue::Missing => Value::Null,
    }
}
