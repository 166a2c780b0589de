//! Annotation worker loop

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

use sentiment_common::{FailurePolicy, WorkerConfig};
use sentiment_core::traits::{ClassifierError, MessageRepository, SentimentClassifier};
use sentiment_core::value_objects::MessageId;
use sentiment_core::DomainError;

use super::sleeper::{Sleeper, TokioSleeper};

/// Error type for a failed annotation pass
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("Storage error: {0}")]
    Storage(#[from] DomainError),

    #[error("Failed to classify message {id}: {source}")]
    Classifier {
        id: MessageId,
        #[source]
        source: ClassifierError,
    },
}

/// Outcome of one committed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Unlabeled messages read at the start of the pass
    pub examined: usize,
    /// Messages this pass actually labeled, in processing order.
    /// Rows labeled by a concurrent writer are absent.
    pub updated: Vec<MessageId>,
}

/// Background worker assigning sentiment labels to unlabeled messages.
///
/// Each pass runs inside one storage transaction: read every unlabeled
/// message, classify them one at a time, write each label only if the row is
/// still unlabeled, then commit once. A failure anywhere abandons the pass and
/// its uncommitted writes; those messages are picked up again next time.
pub struct AnnotationWorker {
    messages: Arc<dyn MessageRepository>,
    classifier: Arc<dyn SentimentClassifier>,
    sleeper: Arc<dyn Sleeper>,
    config: WorkerConfig,
}

impl AnnotationWorker {
    /// Create a worker that sleeps with `tokio::time::sleep`
    pub fn new(
        messages: Arc<dyn MessageRepository>,
        classifier: Arc<dyn SentimentClassifier>,
        config: WorkerConfig,
    ) -> Self {
        Self {
            messages,
            classifier,
            sleeper: Arc::new(TokioSleeper),
            config,
        }
    }

    /// Replace the sleeper used between passes
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Run a single pass
    ///
    /// # Errors
    /// Returns `WorkerError` if storage or the classifier fails; nothing from
    /// the pass is committed in that case.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> Result<PassReport, WorkerError> {
        let mut pass = self.messages.begin_pass().await?;
        let pending = pass.find_unlabeled().await?;

        if pending.is_empty() {
            debug!("No unlabeled messages");
            return Ok(PassReport::default());
        }

        let mut updated = Vec::with_capacity(pending.len());
        for message in &pending {
            let label = self
                .classifier
                .classify(&message.text)
                .await
                .map_err(|source| WorkerError::Classifier {
                    id: message.id,
                    source,
                })?;

            if pass.label_if_unset(message.id, &label).await? {
                updated.push(message.id);
            } else {
                debug!(id = %message.id, "Message already labeled, skipping");
            }
        }

        pass.commit().await?;

        if !updated.is_empty() {
            info!(count = updated.len(), ids = ?updated, "Sentiment added to messages");
        }

        Ok(PassReport {
            examined: pending.len(),
            updated,
        })
    }

    /// Poll until `shutdown` flips to `true` (or its sender is dropped).
    ///
    /// Shutdown is only observed between passes; a pass in progress always
    /// runs to completion or failure.
    ///
    /// # Errors
    /// With `FailurePolicy::Stop`, the first failed pass ends the loop and its
    /// error is returned.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<(), WorkerError> {
        info!(
            poll_interval_secs = self.config.poll_interval.as_secs(),
            failure_policy = ?self.config.failure_policy,
            "Annotation worker started"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            if let Err(e) = self.run_once().await {
                match self.config.failure_policy {
                    FailurePolicy::Stop => {
                        error!(error = %e, "Annotation pass failed, stopping worker");
                        return Err(e);
                    }
                    FailurePolicy::Continue => {
                        error!(error = %e, "Annotation pass failed, retrying next interval");
                    }
                }
            }

            tokio::select! {
                () = self.sleeper.sleep(self.config.poll_interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("Annotation worker stopped");
        Ok(())
    }
}
