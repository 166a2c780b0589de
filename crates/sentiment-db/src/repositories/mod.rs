//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in sentiment-core.

mod error;
mod message;
mod stats;

pub use message::{PgAnnotationPass, PgMessageRepository};
pub use stats::PgSentimentStatsRepository;
