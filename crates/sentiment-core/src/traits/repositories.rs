//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::entities::{BucketCount, LabelCount, Message, UnlabeledMessage};
use crate::error::DomainError;
use crate::value_objects::{MessageId, SentimentLabel};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// List every message, ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Message>>;

    /// Find message by ID
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>>;

    /// Open one annotation pass.
    ///
    /// A pass owns a single storage connection and transaction for its whole
    /// lifetime. Writes become visible only on [`AnnotationPass::commit`];
    /// dropping the pass without committing discards them.
    async fn begin_pass(&self) -> RepoResult<Box<dyn AnnotationPass>>;
}

/// One polling iteration's unit of work against storage
#[async_trait]
pub trait AnnotationPass: Send {
    /// All messages whose sentiment is still unset
    async fn find_unlabeled(&mut self) -> RepoResult<Vec<UnlabeledMessage>>;

    /// Set the label only if the row is still unlabeled.
    ///
    /// Returns `true` when a row was matched, `false` when it was already
    /// labeled (by a concurrent writer) or no longer exists.
    async fn label_if_unset(&mut self, id: MessageId, label: &SentimentLabel) -> RepoResult<bool>;

    /// Commit every write made through this pass
    async fn commit(self: Box<Self>) -> RepoResult<()>;
}

// ============================================================================
// Sentiment Stats Repository
// ============================================================================

#[async_trait]
pub trait SentimentStatsRepository: Send + Sync {
    /// Labeled message counts per (local day, normalized label) since `since`
    async fn daily_counts(
        &self,
        since: DateTime<Utc>,
        tz: Tz,
    ) -> RepoResult<Vec<BucketCount<NaiveDate>>>;

    /// Labeled message counts per (local hour, normalized label) since `since`
    async fn hourly_counts(
        &self,
        since: DateTime<Utc>,
        tz: Tz,
    ) -> RepoResult<Vec<BucketCount<NaiveDateTime>>>;

    /// Labeled message counts per normalized label, all time
    async fn label_counts(&self) -> RepoResult<Vec<LabelCount>>;
}
