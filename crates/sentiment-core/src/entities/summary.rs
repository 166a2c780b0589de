//! Sentiment summaries - reshaping per-label counts into dashboard rows
//!
//! Storage returns `(bucket, label, count)` rows. The functions here collapse
//! labels into categories, fill the missing categories of every observed
//! bucket with explicit zeros, and sort buckets ascending. A bucket without any
//! labeled message never appears.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::value_objects::{SentimentCategory, SentimentLabel};

/// Count of labeled messages for one (bucket, raw label) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCount<B> {
    pub bucket: B,
    pub label: SentimentLabel,
    pub count: i64,
}

impl<B> BucketCount<B> {
    pub fn new(bucket: B, label: impl Into<SentimentLabel>, count: i64) -> Self {
        Self {
            bucket,
            label: label.into(),
            count,
        }
    }
}

/// Count of labeled messages for one raw label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: SentimentLabel,
    pub count: i64,
}

impl LabelCount {
    pub fn new(label: impl Into<SentimentLabel>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// One calendar day (display time zone). Neutral traffic is not broken out
/// at this granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySentiment {
    pub day: NaiveDate,
    pub positive: i64,
    pub negative: i64,
}

/// One clock hour (display time zone)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlySentiment {
    pub hour: NaiveDateTime,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

/// Lower-cased raw label -> count
pub type OverallSentiment = BTreeMap<String, i64>;

#[derive(Debug, Default, Clone, Copy)]
struct CategoryTally {
    positive: i64,
    negative: i64,
    neutral: i64,
}

impl CategoryTally {
    fn add(&mut self, category: SentimentCategory, count: i64) {
        match category {
            SentimentCategory::Positive => self.positive += count,
            SentimentCategory::Negative => self.negative += count,
            SentimentCategory::Neutral => self.neutral += count,
        }
    }
}

fn tally_by_bucket<B, I>(counts: I) -> BTreeMap<B, CategoryTally>
where
    B: Ord,
    I: IntoIterator<Item = BucketCount<B>>,
{
    let mut buckets: BTreeMap<B, CategoryTally> = BTreeMap::new();
    for row in counts {
        if row.count <= 0 {
            continue;
        }
        buckets
            .entry(row.bucket)
            .or_default()
            .add(row.label.category(), row.count);
    }
    buckets
}

/// Fold per-day label counts into one row per active day, ascending
pub fn summarize_daily<I>(counts: I) -> Vec<DailySentiment>
where
    I: IntoIterator<Item = BucketCount<NaiveDate>>,
{
    tally_by_bucket(counts)
        .into_iter()
        .map(|(day, tally)| DailySentiment {
            day,
            positive: tally.positive,
            negative: tally.negative,
        })
        .collect()
}

/// Fold per-hour label counts into one row per active hour, ascending
pub fn summarize_hourly<I>(counts: I) -> Vec<HourlySentiment>
where
    I: IntoIterator<Item = BucketCount<NaiveDateTime>>,
{
    tally_by_bucket(counts)
        .into_iter()
        .map(|(hour, tally)| HourlySentiment {
            hour,
            positive: tally.positive,
            negative: tally.negative,
            neutral: tally.neutral,
        })
        .collect()
}

/// Merge label counts by trimmed, lower-cased label. No category collapsing.
pub fn summarize_overall<I>(counts: I) -> OverallSentiment
where
    I: IntoIterator<Item = LabelCount>,
{
    let mut overall = OverallSentiment::new();
    for row in counts {
        if row.count <= 0 {
            continue;
        }
        *overall.entry(row.label.normalized()).or_insert(0) += row.count;
    }
    overall
}
