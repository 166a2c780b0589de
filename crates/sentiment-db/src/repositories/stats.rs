//! PostgreSQL implementation of SentimentStatsRepository
//!
//! Bucketing happens in SQL: `data_envio` is shifted into the display zone with
//! `AT TIME ZONE` before `date_trunc`, so day and hour boundaries follow local
//! wall-clock time (including DST changes). Labels are trimmed and
//! lower-cased to match `SentimentLabel::normalized`; category collapsing is
//! left to the caller.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use sqlx::PgPool;
use tracing::instrument;

use sentiment_core::entities::{BucketCount, LabelCount};
use sentiment_core::traits::{RepoResult, SentimentStatsRepository};

use crate::models::{DailyCountModel, HourlyCountModel, LabelCountModel};

use super::error::map_db_error;

/// PostgreSQL implementation of SentimentStatsRepository
#[derive(Clone)]
pub struct PgSentimentStatsRepository {
    pool: PgPool,
}

impl PgSentimentStatsRepository {
    /// Create a new PgSentimentStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SentimentStatsRepository for PgSentimentStatsRepository {
    #[instrument(skip(self))]
    async fn daily_counts(
        &self,
        since: DateTime<Utc>,
        tz: Tz,
    ) -> RepoResult<Vec<BucketCount<NaiveDate>>> {
        let rows = sqlx::query_as::<_, DailyCountModel>(
            r#"
            SELECT date_trunc('day', data_envio AT TIME ZONE $2)::date AS day,
                   lower(trim(sentimento)) AS label,
                   COUNT(*) AS total
            FROM mensagens
            WHERE sentimento IS NOT NULL AND data_envio >= $1
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
        )
        .bind(since)
        .bind(tz.name())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BucketCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn hourly_counts(
        &self,
        since: DateTime<Utc>,
        tz: Tz,
    ) -> RepoResult<Vec<BucketCount<NaiveDateTime>>> {
        let rows = sqlx::query_as::<_, HourlyCountModel>(
            r#"
            SELECT date_trunc('hour', data_envio AT TIME ZONE $2) AS hour,
                   lower(trim(sentimento)) AS label,
                   COUNT(*) AS total
            FROM mensagens
            WHERE sentimento IS NOT NULL AND data_envio >= $1
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
        )
        .bind(since)
        .bind(tz.name())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BucketCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn label_counts(&self) -> RepoResult<Vec<LabelCount>> {
        let rows = sqlx::query_as::<_, LabelCountModel>(
            r#"
            SELECT lower(trim(sentimento)) AS label, COUNT(*) AS total
            FROM mensagens
            WHERE sentimento IS NOT NULL
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LabelCount::from).collect())
    }
}
