//! Ports implemented by the infrastructure crates
//!
//! - Repository traits for message storage and aggregate queries
//! - The classifier seam
//! - A clock, so time windows can be pinned in tests

mod classifier;
mod clock;
mod repositories;

pub use classifier::{ClassifierError, SentimentClassifier};
pub use clock::{Clock, SystemClock};
pub use repositories::{AnnotationPass, MessageRepository, RepoResult, SentimentStatsRepository};
