//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! `MessageResponse` keeps the column names of the `mensagens` table.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use sentiment_core::entities::{DailySentiment, HourlySentiment, Message};
use sentiment_core::value_objects::SentimentLabel;

// ============================================================================
// Message Responses
// ============================================================================

/// One raw message row
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    #[serde(rename = "mensagem")]
    pub text: String,
    #[serde(rename = "data_envio")]
    pub sent_at: DateTime<Utc>,
    #[serde(rename = "sentimento")]
    pub sentiment: Option<String>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.into_inner(),
            text: message.text,
            sent_at: message.sent_at,
            sentiment: message.sentiment.map(SentimentLabel::into_inner),
        }
    }
}

// ============================================================================
// Sentiment Summary Responses
// ============================================================================

/// Daily row: positive and negative counts for one local calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySentimentResponse {
    pub day: NaiveDate,
    pub positive: i64,
    pub negative: i64,
}

impl From<DailySentiment> for DailySentimentResponse {
    fn from(row: DailySentiment) -> Self {
        Self {
            day: row.day,
            positive: row.positive,
            negative: row.negative,
        }
    }
}

/// Hourly row: all three category counts for one local clock hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlySentimentResponse {
    pub hour: NaiveDateTime,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

impl From<HourlySentiment> for HourlySentimentResponse {
    fn from(row: HourlySentiment) -> Self {
        Self {
            hour: row.hour,
            positive: row.positive,
            negative: row.negative,
            neutral: row.neutral,
        }
    }
}

/// Lower-cased label -> count, serialized as a plain JSON object
pub type OverallSentimentResponse = BTreeMap<String, i64>;

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
