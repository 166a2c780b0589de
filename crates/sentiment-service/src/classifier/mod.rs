//! Sentiment classifier adapters

mod http;

pub use http::{truncate_chars, HttpClassifier};
