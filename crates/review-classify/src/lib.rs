#![deny(unsafe_code)]

pub mod annotate;
pub mod classifier;
pub mod error;
pub mod heuristic;
pub mod labels;
pub mod lexicon;
pub mod remote;

pub use annotate::annotate;
pub use classifier::{Classifier, RowAnnotation};
pub use error::ClassifyError;
pub use heuristic::HeuristicClassifier;
pub use labels::{FeedbackType, Sentiment, Topic};
pub use lexicon::polarity;
pub use remote::{RemoteClassifier, RemoteConfig};
