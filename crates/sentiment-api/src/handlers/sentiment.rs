//! Sentiment summary handlers

use axum::{extract::State, Json};
use sentiment_service::dto::{
    DailySentimentResponse, DailySummaryQuery, HourlySentimentResponse, HourlySummaryQuery,
    OverallSentimentResponse,
};
use sentiment_service::SummaryService;

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Positive and negative counts per local day
///
/// GET /sentiment/daily?days=N
pub async fn daily_summary(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DailySummaryQuery>,
) -> ApiResult<Json<Vec<DailySentimentResponse>>> {
    let service = SummaryService::new(state.service_context());
    let summary = service.daily_summary(query.days).await?;
    Ok(Json(summary))
}

/// Positive, negative and neutral counts per local hour
///
/// GET /sentiment/hourly?hours=N
pub async fn hourly_summary(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<HourlySummaryQuery>,
) -> ApiResult<Json<Vec<HourlySentimentResponse>>> {
    let service = SummaryService::new(state.service_context());
    let summary = service.hourly_summary(query.hours).await?;
    Ok(Json(summary))
}

/// All-time count per label
///
/// GET /sentiment/overall
pub async fn overall_summary(State(state): State<AppState>) -> ApiResult<Json<OverallSentimentResponse>> {
    let service = SummaryService::new(state.service_context());
    let summary = service.overall_summary().await?;
    Ok(Json(summary))
}
