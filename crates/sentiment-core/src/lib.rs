//! # sentiment-core
//!
//! Domain layer containing entities, value objects, summary folding, repository and
//! classifier traits. This crate has zero dependencies on infrastructure (database,
//! web framework, HTTP clients, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    summarize_daily, summarize_hourly, summarize_overall, BucketCount, DailySentiment,
    HourlySentiment, LabelCount, Message, OverallSentiment, UnlabeledMessage,
};
pub use error::DomainError;
pub use traits::{
    AnnotationPass, ClassifierError, Clock, MessageRepository, RepoResult, SentimentClassifier,
    SentimentStatsRepository, SystemClock,
};
pub use value_objects::{
    MessageId, MessageIdParseError, SentimentCategory, SentimentLabel, SummaryWindow,
};
