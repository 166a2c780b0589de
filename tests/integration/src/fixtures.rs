//! Response shapes returned by the API
//!
//! Deserialized independently of the service DTOs so the tests pin the wire
//! format rather than the Rust types.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// Row of `GET /mensagens`
#[derive(Debug, Deserialize)]
pub struct MessageRow {
    pub id: i64,
    pub mensagem: String,
    pub data_envio: DateTime<Utc>,
    pub sentimento: Option<String>,
}

/// Row of `GET /sentiment/daily`
#[derive(Debug, Deserialize)]
pub struct DailyRow {
    pub day: NaiveDate,
    pub positive: i64,
    pub negative: i64,
}

/// Row of `GET /sentiment/hourly`
#[derive(Debug, Deserialize)]
pub struct HourlyRow {
    pub hour: NaiveDateTime,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

/// Body of `GET /sentiment/overall`
pub type OverallBody = BTreeMap<String, i64>;

/// Body of `GET /health/ready`
#[derive(Debug, Deserialize)]
pub struct ReadinessBody {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Deserialize)]
pub struct ReadinessChecks {
    pub database: String,
}

/// Error envelope shared by every failing endpoint
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
