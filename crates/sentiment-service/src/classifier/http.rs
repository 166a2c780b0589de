//! HTTP text-classification client
//!
//! Talks to an inference endpoint in the Hugging Face `text-classification`
//! shape: the request is `{"inputs": text, "parameters": {"truncation": true}}`
//! and the response a list of `{label, score}` candidates, possibly nested one
//! level deep. The highest-scored candidate wins.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use sentiment_common::ClassifierConfig;
use sentiment_core::traits::{ClassifierError, SentimentClassifier};
use sentiment_core::value_objects::SentimentLabel;

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters,
}

#[derive(Debug, Serialize)]
struct ClassifyParameters {
    truncation: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct Prediction {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Flat(Vec<Prediction>),
    Batched(Vec<Vec<Prediction>>),
}

impl ClassifyResponse {
    fn best_label(self) -> Result<SentimentLabel, ClassifierError> {
        let predictions = match self {
            Self::Flat(predictions) => predictions,
            Self::Batched(batches) => batches.into_iter().flatten().collect(),
        };

        predictions
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|p| SentimentLabel::new(p.label))
            .ok_or(ClassifierError::EmptyPrediction)
    }
}

/// First `max_chars` characters of `text`, cut on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Remote sentiment model reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    url: String,
    api_token: Option<String>,
    max_input_chars: usize,
}

impl HttpClassifier {
    /// Build a client with the configured timeout
    ///
    /// # Errors
    /// Returns `ClassifierError::Request` if the HTTP client cannot be built
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifierError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            api_token: config.api_token.clone(),
            max_input_chars: config.max_input_chars,
        })
    }
}

#[async_trait]
impl SentimentClassifier for HttpClassifier {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn classify(&self, text: &str) -> Result<SentimentLabel, ClassifierError> {
        let body = ClassifyRequest {
            inputs: truncate_chars(text, self.max_input_chars),
            parameters: ClassifyParameters { truncation: true },
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        let label = parsed.best_label()?;
        debug!(label = %label, "Message classified");
        Ok(label)
    }
}
