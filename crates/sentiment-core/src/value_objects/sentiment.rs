//! Sentiment labels and the categories they collapse into
//!
//! A [`SentimentLabel`] is whatever string the classifier returned (`"POS"`,
//! `"NEG"`, `"NEU"`, `"positive"`, ...). Dashboards only care about three
//! [`SentimentCategory`] values, derived from the label by prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw label produced by the classifier and stored in the message row
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentLabel(String);

impl SentimentLabel {
    /// Wrap a raw classifier label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label exactly as stored
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed, lower-cased form used as the key of the overall summary
    pub fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }

    /// Category this label collapses into
    pub fn category(&self) -> SentimentCategory {
        SentimentCategory::from_label(&self.0)
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SentimentLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for SentimentLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Aggregation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// All categories in reporting order
    pub const ALL: [SentimentCategory; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Collapse a raw label into a category.
    ///
    /// Pure prefix rule on the lower-cased, trimmed label:
    ///
    /// | label starts with | category |
    /// |---|---|
    /// | `pos` | `Positive` |
    /// | `neg` | `Negative` |
    /// | anything else (including empty) | `Neutral` |
    pub fn from_label(label: &str) -> Self {
        let lowered = label.trim().to_lowercase();
        if lowered.starts_with("pos") {
            Self::Positive
        } else if lowered.starts_with("neg") {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
