//! Table annotation driver.

use std::time::Instant;

use tracing::info;

use review_model::{CellValue, ReviewTable, SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN};

use crate::classifier::Classifier;
use crate::error::ClassifyError;

/// Classifies the text column and appends the strategy's derived columns.
///
/// All-or-nothing: the table is only modified once every row has been
/// classified, so a failed remote call never leaves a partial column behind.
pub fn annotate(
    table: &mut ReviewTable,
    text_column: &str,
    classifier: &dyn Classifier,
) -> Result<(), ClassifyError> {
    let start = Instant::now();
    let texts = table.column_values(text_column)?;
    let annotations = classifier.annotations(&texts)?;
    if annotations.len() != texts.len() {
        return Err(ClassifyError::AnnotationCount {
            expected: texts.len(),
            actual: annotations.len(),
        });
    }

    let wants_type = classifier.derived_columns().contains(&TYPE_COLUMN);
    let mut sentiments = Vec::with_capacity(annotations.len());
    let mut topics = Vec::with_capacity(annotations.len());
    let mut types = Vec::with_capacity(annotations.len());
    for annotation in annotations {
        sentiments.push(CellValue::Text(annotation.sentiment));
        topics.push(CellValue::Text(annotation.topic));
        if wants_type {
            types.push(match annotation.feedback_type {
                Some(value) => CellValue::Text(value),
                None => CellValue::Missing,
            });
        }
    }

    table.append_column(SENTIMENT_COLUMN, sentiments)?;
    table.append_column(TOPIC_COLUMN, topics)?;
    if wants_type {
        table.append_column(TYPE_COLUMN, types)?;
    }
    info!(
        strategy = classifier.name(),
        rows = table.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "classification complete"
    );
    Ok(())
}
