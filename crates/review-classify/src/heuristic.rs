//! Local rule-based classification.
//!
//! Deterministic and offline: sentiment from the lexical polarity score,
//! topic and feedback type from ordered keyword rules over the lowercased
//! text. Missing or non-text cells classify as Neutral / Other / General
//! Feedback.

use review_model::{CellValue, SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN};

use crate::classifier::{Classifier, RowAnnotation};
use crate::error::ClassifyError;
use crate::labels::{FeedbackType, Sentiment, Topic};
use crate::lexicon::polarity;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn sentiment_of(text: &str) -> Sentiment {
        let score = polarity(text);
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// First topic whose keywords appear in the text; rule order matters
    /// because a review can match several topics.
    pub fn topic_of(lowered: &str) -> Topic {
        for topic in Topic::all() {
            if topic
                .keywords()
                .iter()
                .any(|keyword| lowered.contains(keyword))
            {
                return topic;
            }
        }
        Topic::Other
    }

    /// Feedback type from sentiment and keywords, in priority order. A
    /// negative review is always a complaint.
    pub fn feedback_type_of(sentiment: Sentiment, lowered: &str) -> FeedbackType {
        if sentiment == Sentiment::Negative {
            return FeedbackType::Complaint;
        }
        if sentiment == Sentiment::Positive
            && (lowered.contains("thank") || lowered.contains("love"))
        {
            return FeedbackType::Praise;
        }
        if lowered.contains("should") || lowered.contains("could") {
            return FeedbackType::Suggestion;
        }
        FeedbackType::GeneralFeedback
    }

    fn annotate_cell(cell: &CellValue) -> RowAnnotation {
        match cell.as_text() {
            Some(text) => {
                let lowered = text.to_lowercase();
                let sentiment = Self::sentiment_of(text);
                let topic = Self::topic_of(&lowered);
                let feedback_type = Self::feedback_type_of(sentiment, &lowered);
                RowAnnotation {
                    sentiment: sentiment.as_str().to_string(),
                    topic: topic.as_str().to_string(),
                    feedback_type: Some(feedback_type.as_str().to_string()),
                }
            }
            None => RowAnnotation {
                sentiment: Sentiment::Neutral.as_str().to_string(),
                topic: Topic::Other.as_str().to_string(),
                feedback_type: Some(FeedbackType::GeneralFeedback.as_str().to_string()),
            },
        }
    }
}

impl Classifier for HeuristicClassifier {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn derived_columns(&self) -> &'static [&'static str] {
        &[SENTIMENT_COLUMN, TOPIC_COLUMN, TYPE_COLUMN]
    }

    fn annotations(&self, texts: &[CellValue]) -> Result<Vec<RowAnnotation>, ClassifyError> {
        Ok(texts.iter().map(Self::annotate_cell).collect())
    }
}
