//! Classifier seam
//!
//! The model itself lives outside this workspace. Anything that can turn a
//! piece of text into a single label implements [`SentimentClassifier`].

use async_trait::async_trait;
use thiserror::Error;

use crate::value_objects::SentimentLabel;

/// Errors raised while classifying a message
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Classifier request failed: {0}")]
    Request(String),

    #[error("Classifier returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid classifier response: {0}")]
    InvalidResponse(String),

    #[error("Classifier returned no prediction")]
    EmptyPrediction,
}

/// Text classification function, `classify(text) -> label`.
///
/// Implementations are expected to be deterministic for a given input and to
/// truncate overlong input themselves.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, ClassifierError>;
}
