//! Remote chat-completion classification.
//!
//! One request per review per dimension (sentiment, then topic), strictly
//! sequential with no batching, caching, or retries. Any failed call aborts
//! the whole pass. Model output is trimmed and passed through verbatim; it is
//! not validated against the heuristic label sets.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use review_model::{CellValue, SENTIMENT_COLUMN, TOPIC_COLUMN};

use crate::classifier::{Classifier, RowAnnotation};
use crate::error::ClassifyError;

/// Environment variable holding the service API key.
pub const API_KEY_VAR: &str = "REVIEW_API_KEY";
/// Environment variable holding the service project identifier.
pub const PROJECT_ID_VAR: &str = "REVIEW_PROJECT_ID";
/// Environment variable overriding the completion endpoint URL.
pub const API_URL_VAR: &str = "REVIEW_API_URL";

const DEFAULT_API_URL: &str = "https://app.premai.io/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;
const SENTIMENT_MAX_TOKENS: u32 = 10;
const TOPIC_MAX_TOKENS: u32 = 20;

/// Label used for rows whose text cell is missing; such rows are never sent
/// over the wire.
const MISSING_SENTIMENT: &str = "Neutral";
const MISSING_TOPIC: &str = "Unknown";

/// Connection settings for the remote classification service.
///
/// Credentials are supplied out-of-band via the environment; they are never
/// embedded in the binary.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub api_key: String,
    pub project_id: String,
    pub base_url: String,
    pub temperature: f32,
}

impl RemoteConfig {
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            base_url: DEFAULT_API_URL.to_string(),
            temperature: TEMPERATURE,
        }
    }

    /// Loads the configuration from the environment, failing fast before any
    /// network call when a required variable is absent.
    pub fn from_env() -> Result<Self, ClassifyError> {
        let api_key = require_env(API_KEY_VAR)?;
        let project_id = require_env(PROJECT_ID_VAR)?;
        let mut config = Self::new(api_key, project_id);
        if let Ok(url) = std::env::var(API_URL_VAR) {
            config.base_url = url;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn require_env(name: &str) -> Result<String, ClassifyError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ClassifyError::Config(format!("environment variable {name} is not set")))
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    project_id: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Blocking client for the remote classification service.
pub struct RemoteClassifier {
    client: reqwest::blocking::Client,
    config: RemoteConfig,
}

impl RemoteClassifier {
    pub fn new(config: RemoteConfig) -> Result<Self, ClassifyError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.api_key);
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|_| ClassifyError::Config("API key contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClassifyError::Remote(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Loads configuration from the environment and builds the client.
    pub fn from_env() -> Result<Self, ClassifyError> {
        Self::new(RemoteConfig::from_env()?)
    }

    fn complete(&self, prompt: String, max_tokens: u32) -> Result<String, ClassifyError> {
        let request = ChatRequest {
            project_id: &self.config.project_id,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens,
        };
        let response = self
            .client
            .post(&self.config.base_url)
            .json(&request)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifyError::Remote(format!(
                "service returned {status}: {body}"
            )));
        }
        let completion: ChatResponse = response.json()?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ClassifyError::Remote("service returned no choices".to_string()))?;
        Ok(content.trim().to_string())
    }

    fn classify_sentiment(&self, text: &str) -> Result<String, ClassifyError> {
        let prompt = format!(
            "Classify the sentiment of this text as Positive, Negative, or Neutral: '{text}'"
        );
        self.complete(prompt, SENTIMENT_MAX_TOKENS)
    }

    fn classify_topic(&self, text: &str) -> Result<String, ClassifyError> {
        let prompt = format!("Identify the topic of this text in one or two words: '{text}'");
        self.complete(prompt, TOPIC_MAX_TOKENS)
    }
}

impl Classifier for RemoteClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn derived_columns(&self) -> &'static [&'static str] {
        &[SENTIMENT_COLUMN, TOPIC_COLUMN]
    }

    fn annotations(&self, texts: &[CellValue]) -> Result<Vec<RowAnnotation>, ClassifyError> {
        // Two sequential passes, matching the service call order: all
        // sentiment requests first, then all topic requests.
        let mut sentiments = Vec::with_capacity(texts.len());
        for (index, cell) in texts.iter().enumerate() {
            let sentiment = match cell.as_text() {
                Some(text) => self.classify_sentiment(text)?,
                None => MISSING_SENTIMENT.to_string(),
            };
            debug!(row = index, "classified sentiment");
            sentiments.push(sentiment);
        }

        let mut annotations = Vec::with_capacity(texts.len());
        for (index, (cell, sentiment)) in texts.iter().zip(sentiments).enumerate() {
            let topic = match cell.as_text() {
                Some(text) => self.classify_topic(text)?,
                None => MISSING_TOPIC.to_string(),
            };
            debug!(row = index, "classified topic");
            annotations.push(RowAnnotation {
                sentiment,
                topic,
                feedback_type: None,
            });
        }
        Ok(annotations)
    }
}
