//! Classification vocabulary.
//!
//! The heuristic strategy draws from these closed label sets; the remote
//! strategy returns free-form strings that are passed through verbatim.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn all() -> [Sentiment; 3] {
        [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse review subject labels for the heuristic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Delivery,
    ProductQuality,
    CustomerSupport,
    Pricing,
    Other,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Delivery => "Delivery",
            Topic::ProductQuality => "Product Quality",
            Topic::CustomerSupport => "Customer Support",
            Topic::Pricing => "Pricing",
            Topic::Other => "Other",
        }
    }

    /// Text keywords that map to this topic. `Other` is the fallback and has
    /// no keywords of its own.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Delivery => &["delivery"],
            Topic::ProductQuality => &["quality", "build"],
            Topic::CustomerSupport => &["support", "service"],
            Topic::Pricing => &["price", "expensive"],
            Topic::Other => &[],
        }
    }

    /// All topics in rule priority order; earlier entries win when a review
    /// matches keywords from several topics.
    pub fn all() -> [Topic; 5] {
        [
            Topic::Delivery,
            Topic::ProductQuality,
            Topic::CustomerSupport,
            Topic::Pricing,
            Topic::Other,
        ]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse review intent labels for the heuristic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackType {
    Complaint,
    Praise,
    Suggestion,
    GeneralFeedback,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Complaint => "Complaint",
            FeedbackType::Praise => "Praise",
            FeedbackType::Suggestion => "Suggestion",
            FeedbackType::GeneralFeedback => "General Feedback",
        }
    }

    pub fn all() -> [FeedbackType; 4] {
        [
            FeedbackType::Complaint,
            FeedbackType::Praise,
            FeedbackType::Suggestion,
            FeedbackType::GeneralFeedback,
        ]
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
