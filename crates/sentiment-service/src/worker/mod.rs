//! Background annotation worker
//!
//! Polls for unlabeled messages, classifies them and writes labels back
//! with a conditional update, one transaction per pass.

mod annotation;
mod sleeper;

pub use annotation::{AnnotationWorker, PassReport, WorkerError};
pub use sentiment_common::{FailurePolicy, WorkerConfig};
pub use sleeper::{Sleeper, TokioSleeper};
