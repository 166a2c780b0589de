//! Summary service
//!
//! Windowed sentiment aggregates for dashboards. Storage does the bucketing
//! and counting; the category fold is `sentiment_core::summarize_*`.

use tracing::{debug, instrument};

use sentiment_core::value_objects::SummaryWindow;
use sentiment_core::{summarize_daily, summarize_hourly, summarize_overall};

use crate::dto::{DailySentimentResponse, HourlySentimentResponse, OverallSentimentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Summary service
pub struct SummaryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SummaryService<'a> {
    /// Create a new SummaryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Positive/negative counts per local day over the trailing `days`
    /// (configured default when `None`), ascending by day
    #[instrument(skip(self))]
    pub async fn daily_summary(&self, days: Option<u32>) -> ServiceResult<Vec<DailySentimentResponse>> {
        let config = self.ctx.summary_config();
        let window = SummaryWindow::days(days.unwrap_or(config.daily_window_days))?;
        let since = window.since(self.ctx.clock().now())?;

        let counts = self
            .ctx
            .stats_repo()
            .daily_counts(since, config.display_timezone)
            .await?;
        debug!(rows = counts.len(), %since, "Fetched daily counts");

        Ok(summarize_daily(counts)
            .into_iter()
            .map(DailySentimentResponse::from)
            .collect())
    }

    /// Positive/negative/neutral counts per local hour over the trailing
    /// `hours` (configured default when `None`), ascending by hour
    #[instrument(skip(self))]
    pub async fn hourly_summary(
        &self,
        hours: Option<u32>,
    ) -> ServiceResult<Vec<HourlySentimentResponse>> {
        let config = self.ctx.summary_config();
        let window = SummaryWindow::hours(hours.unwrap_or(config.hourly_window_hours))?;
        let since = window.since(self.ctx.clock().now())?;

        let counts = self
            .ctx
            .stats_repo()
            .hourly_counts(since, config.display_timezone)
            .await?;
        debug!(rows = counts.len(), %since, "Fetched hourly counts");

        Ok(summarize_hourly(counts)
            .into_iter()
            .map(HourlySentimentResponse::from)
            .collect())
    }

    /// All-time count per lower-cased raw label
    #[instrument(skip(self))]
    pub async fn overall_summary(&self) -> ServiceResult<OverallSentimentResponse> {
        let counts = self.ctx.stats_repo().label_counts().await?;
        Ok(summarize_overall(counts))
    }
}
