//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Query DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{DailySummaryQuery, HourlySummaryQuery};

pub use responses::{
    DailySentimentResponse, HealthChecks, HealthResponse, HourlySentimentResponse,
    MessageResponse, OverallSentimentResponse, ReadinessResponse,
};
