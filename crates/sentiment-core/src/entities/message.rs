//! Message entity - a free-text message awaiting or carrying a sentiment label

use chrono::{DateTime, Utc};

use crate::value_objects::{MessageId, SentimentLabel};

/// Message entity
///
/// `id`, `text` and `sent_at` never change after creation. `sentiment` starts
/// unset and transitions at most once, from `None` to a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub sentiment: Option<SentimentLabel>,
}

impl Message {
    /// Create a new, unlabeled Message
    pub fn new(id: MessageId, text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sent_at,
            sentiment: None,
        }
    }

    /// Check if the message already carries a label
    #[inline]
    pub fn is_labeled(&self) -> bool {
        self.sentiment.is_some()
    }

    /// Apply a label if none is set yet.
    ///
    /// Returns `false` and leaves the message untouched when it is already
    /// labeled.
    pub fn apply_label(&mut self, label: SentimentLabel) -> bool {
        if self.is_labeled() {
            return false;
        }
        self.sentiment = Some(label);
        true
    }

    /// Projection handed to the annotation worker
    pub fn to_unlabeled(&self) -> Option<UnlabeledMessage> {
        if self.is_labeled() {
            None
        } else {
            Some(UnlabeledMessage {
                id: self.id,
                text: self.text.clone(),
            })
        }
    }
}

/// The part of a message the annotation worker needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlabeledMessage {
    pub id: MessageId,
    pub text: String,
}
