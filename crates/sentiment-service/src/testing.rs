//! In-memory fakes for the storage, classifier, clock and sleeper seams

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tokio::sync::watch;

use sentiment_core::entities::{BucketCount, LabelCount, Message, UnlabeledMessage};
use sentiment_core::traits::{
    AnnotationPass, ClassifierError, Clock, MessageRepository, RepoResult, SentimentClassifier,
    SentimentStatsRepository,
};
use sentiment_core::value_objects::{MessageId, SentimentLabel};
use sentiment_core::DomainError;

use crate::worker::Sleeper;

// ============================================================================
// Message store
// ============================================================================

#[derive(Default)]
struct StoreState {
    rows: BTreeMap<MessageId, Message>,
    /// Label a concurrent writer commits right after the next read
    racer: Option<(Vec<MessageId>, SentimentLabel)>,
    fail_begin: bool,
    commits: usize,
}

/// Message table kept in memory. Passes stage writes and apply them on commit.
#[derive(Clone, Default)]
pub(crate) struct InMemoryMessages {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryMessages {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&self, id: i64, text: &str, sentiment: Option<&str>) {
        let mut message = Message::new(MessageId::new(id), text, Utc::now());
        message.sentiment = sentiment.map(SentimentLabel::new);
        self.state.lock().unwrap().rows.insert(message.id, message);
    }

    /// Have another writer label `ids` between the pass's read and its writes
    pub(crate) fn race_after_read(&self, ids: &[i64], label: &str) {
        let ids = ids.iter().copied().map(MessageId::new).collect();
        self.state.lock().unwrap().racer = Some((ids, SentimentLabel::new(label)));
    }

    pub(crate) fn fail_begin(&self) {
        self.state.lock().unwrap().fail_begin = true;
    }

    pub(crate) fn label_of(&self, id: i64) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .rows
            .get(&MessageId::new(id))
            .and_then(|m| m.sentiment.clone())
            .map(SentimentLabel::into_inner)
    }

    pub(crate) fn commits(&self) -> usize {
        self.state.lock().unwrap().commits
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessages {
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn begin_pass(&self) -> RepoResult<Box<dyn AnnotationPass>> {
        if self.state.lock().unwrap().fail_begin {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(Box::new(InMemoryPass {
            state: Arc::clone(&self.state),
            staged: Vec::new(),
        }))
    }
}

struct InMemoryPass {
    state: Arc<Mutex<StoreState>>,
    staged: Vec<(MessageId, SentimentLabel)>,
}

#[async_trait]
impl AnnotationPass for InMemoryPass {
    async fn find_unlabeled(&mut self) -> RepoResult<Vec<UnlabeledMessage>> {
        let mut state = self.state.lock().unwrap();
        let pending: Vec<UnlabeledMessage> =
            state.rows.values().filter_map(Message::to_unlabeled).collect();

        if let Some((ids, label)) = state.racer.take() {
            for id in ids {
                if let Some(row) = state.rows.get_mut(&id) {
                    row.apply_label(label.clone());
                }
            }
        }

        Ok(pending)
    }

    async fn label_if_unset(&mut self, id: MessageId, label: &SentimentLabel) -> RepoResult<bool> {
        let state = self.state.lock().unwrap();
        let unset = state.rows.get(&id).is_some_and(|row| !row.is_labeled());
        let staged = self.staged.iter().any(|(staged_id, _)| *staged_id == id);
        drop(state);

        if unset && !staged {
            self.staged.push((id, label.clone()));
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let pass = *self;
        let mut state = pass.state.lock().unwrap();
        for (id, label) in pass.staged {
            if let Some(row) = state.rows.get_mut(&id) {
                row.apply_label(label);
            }
        }
        state.commits += 1;
        Ok(())
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Returns canned rows and records the window it was asked for
#[derive(Default)]
pub(crate) struct FixedStats {
    pub(crate) daily: Vec<BucketCount<NaiveDate>>,
    pub(crate) hourly: Vec<BucketCount<NaiveDateTime>>,
    pub(crate) labels: Vec<LabelCount>,
    pub(crate) fail: bool,
    pub(crate) last_query: Mutex<Option<(DateTime<Utc>, Tz)>>,
}

impl FixedStats {
    pub(crate) fn last_query(&self) -> Option<(DateTime<Utc>, Tz)> {
        *self.last_query.lock().unwrap()
    }

    fn check(&self) -> RepoResult<()> {
        if self.fail {
            Err(DomainError::DatabaseError("statement timeout".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SentimentStatsRepository for FixedStats {
    async fn daily_counts(
        &self,
        since: DateTime<Utc>,
        tz: Tz,
    ) -> RepoResult<Vec<BucketCount<NaiveDate>>> {
        self.check()?;
        *self.last_query.lock().unwrap() = Some((since, tz));
        Ok(self.daily.clone())
    }

    async fn hourly_counts(
        &self,
        since: DateTime<Utc>,
        tz: Tz,
    ) -> RepoResult<Vec<BucketCount<NaiveDateTime>>> {
        self.check()?;
        *self.last_query.lock().unwrap() = Some((since, tz));
        Ok(self.hourly.clone())
    }

    async fn label_counts(&self) -> RepoResult<Vec<LabelCount>> {
        self.check()?;
        Ok(self.labels.clone())
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Deterministic classifier: known texts map to fixed labels, anything else is "NEU"
#[derive(Default)]
pub(crate) struct StubClassifier {
    labels: HashMap<String, String>,
    failing: HashSet<String>,
    fail_all: bool,
    calls: Mutex<Vec<String>>,
}

impl StubClassifier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, text: &str, label: &str) -> Self {
        self.labels.insert(text.to_string(), label.to_string());
        self
    }

    pub(crate) fn failing_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    pub(crate) fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentClassifier for StubClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, ClassifierError> {
        self.calls.lock().unwrap().push(text.to_string());
        if self.fail_all || self.failing.contains(text) {
            return Err(ClassifierError::Request("model unavailable".to_string()));
        }
        Ok(SentimentLabel::new(
            self.labels.get(text).map_or("NEU", String::as_str),
        ))
    }
}

// ============================================================================
// Clock and sleeper
// ============================================================================

pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns immediately and fires shutdown after `stop_after` sleeps
pub(crate) struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
    stop_after: usize,
    shutdown: watch::Sender<bool>,
}

impl RecordingSleeper {
    pub(crate) fn new(stop_after: usize, shutdown: watch::Sender<bool>) -> Self {
        Self {
            sleeps: Mutex::new(Vec::new()),
            stop_after,
            shutdown,
        }
    }

    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        let count = {
            let mut sleeps = self.sleeps.lock().unwrap();
            sleeps.push(duration);
            sleeps.len()
        };
        if count >= self.stop_after {
            self.shutdown.send_replace(true);
        }
    }
}
