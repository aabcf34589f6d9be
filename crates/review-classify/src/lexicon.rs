//! Lexical polarity scoring.
//!
//! A small word-list scorer; intentionally simple and deterministic. The
//! score is the signed hit ratio `(positive - negative) / (positive +
//! negative)`, which stays inside [-1, 1] by construction.

const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "best",
    "easy",
    "excellent",
    "fantastic",
    "fast",
    "friendly",
    "good",
    "great",
    "happy",
    "helpful",
    "like",
    "love",
    "loved",
    "nice",
    "perfect",
    "pleased",
    "quick",
    "recommend",
    "satisfied",
    "smooth",
    "thank",
    "thanks",
    "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "annoying",
    "awful",
    "bad",
    "broken",
    "damaged",
    "defective",
    "disappointed",
    "disappointing",
    "hate",
    "hated",
    "horrible",
    "issue",
    "late",
    "poor",
    "problem",
    "refund",
    "rude",
    "slow",
    "terrible",
    "unhappy",
    "useless",
    "waste",
    "worst",
    "wrong",
];

/// Scores the sentiment polarity of a text in [-1, 1].
///
/// Texts with no lexicon hits score exactly 0.
pub fn polarity(text: &str) -> f64 {
    let mut positive = 0usize;
    let mut negative = 0usize;
    for token in tokens(text) {
        if POSITIVE_WORDS.binary_search(&token.as_str()).is_ok() {
            positive += 1;
        } else if NEGATIVE_WORDS.binary_search(&token.as_str()).is_ok() {
            negative += 1;
        }
    }
    let hits = positive + negative;
    if hits == 0 {
        return 0.0;
    }
    let score = (positive as f64 - negative as f64) / hits as f64;
    score.clamp(-1.0, 1.0)
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}
