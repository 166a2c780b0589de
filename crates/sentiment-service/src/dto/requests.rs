//! Request DTOs for API endpoints
//!
//! Query strings implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// `GET /sentiment/daily?days=N`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DailySummaryQuery {
    #[validate(range(min = 1, max = 365, message = "days must be between 1 and 365"))]
    pub days: Option<u32>,
}

/// `GET /sentiment/hourly?hours=N`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct HourlySummaryQuery {
    #[validate(range(min = 1, max = 720, message = "hours must be between 1 and 720"))]
    pub hours: Option<u32>,
}
