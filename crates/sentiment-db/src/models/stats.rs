//! Aggregate row models

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::FromRow;

/// `(local day, normalized label, count)`
#[derive(Debug, Clone, FromRow)]
pub struct DailyCountModel {
    pub day: NaiveDate,
    pub label: String,
    pub total: i64,
}

/// `(local hour, normalized label, count)`
#[derive(Debug, Clone, FromRow)]
pub struct HourlyCountModel {
    pub hour: NaiveDateTime,
    pub label: String,
    pub total: i64,
}

/// `(normalized label, count)`
#[derive(Debug, Clone, FromRow)]
pub struct LabelCountModel {
    pub label: String,
    pub total: i64,
}
