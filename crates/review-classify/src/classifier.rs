use review_model::CellValue;

use crate::error::ClassifyError;

/// Derived labels for one review row.
///
/// Sentiment and topic are plain strings so remote model output can pass
/// through verbatim; the heuristic strategy writes its fixed vocabulary here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAnnotation {
    pub sentiment: String,
    pub topic: String,
    /// Only produced by strategies that classify feedback type.
    pub feedback_type: Option<String>,
}

/// A classification strategy over the review text column.
///
/// Implementations must return exactly one annotation per input cell or fail
/// as a whole; partial results are never surfaced.
pub trait Classifier {
    /// Short strategy name for logs and status output.
    fn name(&self) -> &'static str;

    /// Derived column names this strategy produces.
    fn derived_columns(&self) -> &'static [&'static str];

    /// Classifies every cell of the text column, in row order.
    fn annotations(&self, texts: &[CellValue]) -> Result<Vec<RowAnnotation>, ClassifyError>;
}
