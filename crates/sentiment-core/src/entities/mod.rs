//! Domain entities - core business objects

mod message;
mod summary;

pub use message::{Message, UnlabeledMessage};
pub use summary::{
    summarize_daily, summarize_hourly, summarize_overall, BucketCount, DailySentiment,
    HourlySentiment, LabelCount, OverallSentiment,
};
