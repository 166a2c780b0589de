//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use sentiment_core::entities::{Message, UnlabeledMessage};
use sentiment_core::traits::{AnnotationPass, MessageRepository, RepoResult};
use sentiment_core::value_objects::{MessageId, SentimentLabel};

use crate::models::{MessageModel, UnlabeledMessageModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, mensagem, data_envio, sentimento
            FROM mensagens
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, mensagem, data_envio, sentimento
            FROM mensagens
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn begin_pass(&self) -> RepoResult<Box<dyn AnnotationPass>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgAnnotationPass { tx }))
    }
}

/// One annotation pass over a single pooled connection.
///
/// Dropping the pass without calling `commit` rolls the transaction back.
pub struct PgAnnotationPass {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl AnnotationPass for PgAnnotationPass {
    #[instrument(skip(self))]
    async fn find_unlabeled(&mut self) -> RepoResult<Vec<UnlabeledMessage>> {
        let results = sqlx::query_as::<_, UnlabeledMessageModel>(
            r#"
            SELECT id, mensagem
            FROM mensagens
            WHERE sentimento IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UnlabeledMessage::from).collect())
    }

    #[instrument(skip(self, label), fields(label = %label))]
    async fn label_if_unset(&mut self, id: MessageId, label: &SentimentLabel) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE mensagens
            SET sentimento = $2
            WHERE id = $1 AND sentimento IS NULL
            "#,
        )
        .bind(id.into_inner())
        .bind(label.as_str())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let pass = *self;
        pass.tx.commit().await.map_err(map_db_error)
    }
}
