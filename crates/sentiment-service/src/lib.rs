//! # sentiment-service
//!
//! Application layer: the annotation worker, summary and message services,
//! the HTTP classifier adapter, and DTOs.

pub mod classifier;
pub mod dto;
pub mod services;
pub mod worker;

#[cfg(test)]
mod testing;

pub use classifier::HttpClassifier;
pub use services::{
    MessageService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SummaryService,
};
pub use worker::{AnnotationWorker, PassReport, Sleeper, TokioSleeper, WorkerError};
