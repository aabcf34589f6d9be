//! Review text column detection.
//!
//! Scores every string-typed column and picks the one most likely to hold
//! free-text review content. The score combines the text-content ratio, the
//! raw average text length, and a column-name keyword bonus:
//!
//! ```text
//! score = 0.5 * text_ratio + 0.4 * mean_text_len + 0.1 * keyword_bonus
//! ```
//!
//! The mean-length term is deliberately unnormalized, so very long text
//! dominates the score; changing that would break compatibility with data
//! already triaged by the original scorer.

use tracing::{debug, info};

use review_model::{CellValue, ReviewTable};

use crate::error::DetectionError;

/// Column-name keywords that earn the detection bonus.
pub const TEXT_COLUMN_KEYWORDS: [&str; 4] = ["review", "feedback", "comment", "message"];

const TEXT_RATIO_WEIGHT: f64 = 0.5;
const MEAN_LENGTH_WEIGHT: f64 = 0.4;
const KEYWORD_WEIGHT: f64 = 0.1;

/// Score for one candidate column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScore {
    pub name: String,
    pub score: f64,
}

/// The column selected as holding review text.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedColumn {
    pub name: String,
    pub score: f64,
}

/// Scores every candidate column in table order.
///
/// A column qualifies when it holds at least one text value and no numeric
/// values (string-typed-or-missing columns only).
pub fn column_scores(table: &ReviewTable) -> Vec<ColumnScore> {
    let row_count = table.row_count();
    let mut scores = Vec::new();
    for name in &table.columns {
        let mut text_count = 0usize;
        let mut number_count = 0usize;
        let mut total_len = 0usize;
        for row in &table.rows {
            match row.get(name) {
                Some(CellValue::Text(text)) => {
                    text_count += 1;
                    total_len += text.chars().count();
                }
                Some(CellValue::Number(_)) => number_count += 1,
                Some(CellValue::Missing) | None => {}
            }
        }
        if text_count == 0 || number_count > 0 {
            continue;
        }
        let text_ratio = text_count as f64 / row_count as f64;
        let mean_text_len = total_len as f64 / row_count as f64;
        let keyword_bonus = if has_keyword(name) { 1.0 } else { 0.0 };
        let score = TEXT_RATIO_WEIGHT * text_ratio
            + MEAN_LENGTH_WEIGHT * mean_text_len
            + KEYWORD_WEIGHT * keyword_bonus;
        debug!(column = %name, score, text_ratio, mean_text_len, "scored candidate column");
        scores.push(ColumnScore {
            name: name.clone(),
            score,
        });
    }
    scores
}

/// Picks the highest-scoring text column; ties break to the earlier column.
pub fn detect_text_column(table: &ReviewTable) -> Result<DetectedColumn, DetectionError> {
    let scores = column_scores(table);
    let best = scores
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.score > best.score {
                candidate
            } else {
                best
            }
        })
        .ok_or(DetectionError::NoTextColumn)?;
    info!(column = %best.name, score = best.score, "detected review text column");
    Ok(DetectedColumn {
        name: best.name,
        score: best.score,
    })
}

fn has_keyword(column: &str) -> bool {
    let lowered = column.to_lowercase();
    TEXT_COLUMN_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
