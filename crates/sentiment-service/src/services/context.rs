//! Service context - dependency container for services
//!
//! Holds the repositories, the classifier, the clock and summary settings
//! needed by services and the annotation worker.

use std::sync::Arc;

use sentiment_common::SummaryConfig;
use sentiment_core::traits::{
    Clock, MessageRepository, SentimentClassifier, SentimentStatsRepository, SystemClock,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Message and statistics repositories
/// - The sentiment classifier used by the annotation worker
/// - The clock that anchors summary windows
/// - Display time zone and default window sizes
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    message_repo: Arc<dyn MessageRepository>,
    stats_repo: Arc<dyn SentimentStatsRepository>,

    // Collaborators
    classifier: Arc<dyn SentimentClassifier>,
    clock: Arc<dyn Clock>,

    summary: SummaryConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        stats_repo: Arc<dyn SentimentStatsRepository>,
        classifier: Arc<dyn SentimentClassifier>,
        clock: Arc<dyn Clock>,
        summary: SummaryConfig,
    ) -> Self {
        Self {
            message_repo,
            stats_repo,
            classifier,
            clock,
            summary,
        }
    }

    // === Repositories ===

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Shared handle to the message repository
    pub fn message_repo_handle(&self) -> Arc<dyn MessageRepository> {
        Arc::clone(&self.message_repo)
    }

    /// Get the sentiment statistics repository
    pub fn stats_repo(&self) -> &dyn SentimentStatsRepository {
        self.stats_repo.as_ref()
    }

    // === Collaborators ===

    /// Shared handle to the classifier
    pub fn classifier(&self) -> Arc<dyn SentimentClassifier> {
        Arc::clone(&self.classifier)
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // === Settings ===

    /// Display time zone and default windows
    pub fn summary_config(&self) -> &SummaryConfig {
        &self.summary
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("classifier", &"dyn SentimentClassifier")
            .field("summary", &self.summary)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    message_repo: Option<Arc<dyn MessageRepository>>,
    stats_repo: Option<Arc<dyn SentimentStatsRepository>>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
    clock: Option<Arc<dyn Clock>>,
    summary: Option<SummaryConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn SentimentStatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Defaults to the system clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Defaults to `SummaryConfig::default()`
    pub fn summary(mut self, summary: SummaryConfig) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.stats_repo
                .ok_or_else(|| ServiceError::validation("stats_repo is required"))?,
            self.classifier
                .ok_or_else(|| ServiceError::validation("classifier is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.summary.unwrap_or_default(),
        ))
    }
}
